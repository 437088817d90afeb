use crate::image_classifier::interface::{ImageClassifier, ImageFile, Prediction, Tier};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct TierFailure {
    pub tier: Tier,
    pub message: String,
}

/// What one identify action produced: the first successful prediction, if
/// any, and every tier that failed before it. `answered_empty` names the
/// tier that answered without a prediction and ended the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub prediction: Option<Prediction>,
    pub answered_empty: Option<Tier>,
    pub failures: Vec<TierFailure>,
}

impl Outcome {
    pub fn remote_failed(&self) -> bool {
        self.failures.iter().any(|failure| failure.tier == Tier::Remote)
    }
}

/// Ordered tiers, tried one after another until one answers.
#[derive(Clone)]
pub struct Pipeline {
    tiers: Vec<Arc<dyn ImageClassifier + Send + Sync>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Pipeline {
    pub fn new(
        tiers: Vec<Arc<dyn ImageClassifier + Send + Sync>>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            tiers,
            logger: logger.with_namespace("pipeline"),
        }
    }

    pub fn identify(&self, image: &ImageFile) -> Outcome {
        let mut failures = Vec::new();

        for classifier in &self.tiers {
            let tier = classifier.tier();

            if !classifier.is_available() {
                let _ = self.logger.info(&format!("Skipping {} tier: unavailable", tier));
                continue;
            }

            match classifier.classify(image) {
                Ok(Some(prediction)) => {
                    let _ = self
                        .logger
                        .info(&format!("Result from {} tier", prediction.tier));
                    return Outcome {
                        prediction: Some(prediction),
                        answered_empty: None,
                        failures,
                    };
                }
                Ok(None) => {
                    let _ = self
                        .logger
                        .info(&format!("{} tier answered without a prediction", tier));
                    return Outcome {
                        prediction: None,
                        answered_empty: Some(tier),
                        failures,
                    };
                }
                Err(e) => {
                    let _ = self.logger.error(&format!("{} tier failed: {}", tier, e));
                    failures.push(TierFailure {
                        tier,
                        message: e.to_string(),
                    });
                }
            }
        }

        Outcome {
            prediction: None,
            answered_empty: None,
            failures,
        }
    }
}
