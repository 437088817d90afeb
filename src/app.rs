use crate::config::Config;
use crate::image_classifier::impl_demo::DemoClassifier;
use crate::image_classifier::impl_remote::RemoteClassifier;
use crate::image_classifier::impl_tract::{LocalModelConfig, TractClassifier};
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::pipeline::Pipeline;
use crate::language::preference::LanguagePreference;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Wires configuration into the long-lived services the commands share.
pub struct App {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub preference: Arc<LanguagePreference>,
}

impl App {
    pub fn new(config: Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let preference = Arc::new(LanguagePreference::new(
            config.preferences_path.clone(),
            logger.clone(),
        ));

        Self {
            config,
            logger,
            preference,
        }
    }

    pub fn remote_classifier(
        &self,
    ) -> Result<RemoteClassifier, Box<dyn std::error::Error + Send + Sync>> {
        RemoteClassifier::new(
            &self.config.api_base,
            self.config.remote_timeout,
            self.logger.clone(),
        )
    }

    /// Remote, then local model, then (if enabled) a demo guess.
    pub fn pipeline(&self) -> Result<Pipeline, Box<dyn std::error::Error + Send + Sync>> {
        let local = TractClassifier::new(
            LocalModelConfig {
                model_dirs: self.config.model_dirs.clone(),
                model_file_name: self.config.model_file_name.clone(),
                labels_file_name: self.config.labels_file_name.clone(),
                default_input_size: self.config.default_input_size,
            },
            self.logger.clone(),
        );

        let mut tiers: Vec<Arc<dyn ImageClassifier + Send + Sync>> =
            vec![Arc::new(self.remote_classifier()?), Arc::new(local)];

        if self.config.demo_fallback {
            tiers.push(Arc::new(DemoClassifier::new(self.logger.clone())));
        }

        Ok(Pipeline::new(tiers, self.logger.clone()))
    }
}
