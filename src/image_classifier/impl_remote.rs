use crate::image_classifier::interface::{
    BreedInfo, ImageClassifier, ImageFile, Label, Prediction, Tier,
};
use crate::library::logger::interface::Logger;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: Option<ApiPrediction>,
    #[serde(default)]
    info: Option<BreedInfo>,
}

#[derive(Debug, Deserialize)]
struct ApiPrediction {
    label: String,
    #[serde(default)]
    probability: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: Option<String>,
}

/// Classifies by uploading the image to `{api_base}/predict`.
pub struct RemoteClassifier {
    api_base: String,
    client: Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl RemoteClassifier {
    pub fn new(
        api_base: &str,
        timeout: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            client,
            logger: logger.with_namespace("remote"),
        })
    }

    pub fn health(&self) -> Result<HealthStatus, Box<dyn std::error::Error + Send + Sync>> {
        let response = self
            .client
            .get(format!("{}/health", self.api_base))
            .send()?
            .error_for_status()?;

        Ok(response.json::<HealthStatus>()?)
    }
}

impl ImageClassifier for RemoteClassifier {
    fn tier(&self) -> Tier {
        Tier::Remote
    }

    fn classify(
        &self,
        image: &ImageFile,
    ) -> Result<Option<Prediction>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/predict", self.api_base);
        let _ = self.logger.info(&format!("POST {}", url));

        let file_name = if image.name.is_empty() {
            "upload.jpg".to_string()
        } else {
            image.name.clone()
        };
        let form = Form::new().part("file", Part::bytes(image.bytes.clone()).file_name(file_name));

        let response = self.client.post(&url).multipart(form).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("API {}", status.as_u16()).into());
        }

        let body: PredictResponse = response.json()?;

        let Some(prediction) = body.prediction else {
            let _ = self.logger.info("No prediction returned by API");
            return Ok(None);
        };

        let confidence = if prediction.probability.is_finite() {
            prediction.probability.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let _ = self.logger.info(&format!(
            "Prediction: {} ({:.3})",
            prediction.label, confidence
        ));

        Ok(Some(Prediction {
            label: Label::from_raw(&prediction.label),
            confidence,
            info: body.info,
            tier: Tier::Remote,
        }))
    }
}
