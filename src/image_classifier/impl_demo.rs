use crate::catalogue::{self, BreedEntry};
use crate::image_classifier::interface::{ImageClassifier, ImageFile, Label, Prediction, Tier};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Fixed placeholder confidence for demo guesses. Not derived from anything.
pub const DEMO_CONFIDENCE: f32 = 0.15;

/// Last resort: a random catalogue breed so the page always shows something.
pub struct DemoClassifier {
    breeds: &'static [BreedEntry],
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DemoClassifier {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::with_breeds(catalogue::all(), logger)
    }

    pub fn with_breeds(breeds: &'static [BreedEntry], logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            breeds,
            logger: logger.with_namespace("demo"),
        }
    }

    fn pick(&self) -> Option<&'static BreedEntry> {
        let index_dist = Uniform::new(0, self.breeds.len()).ok()?;
        let mut rng = rand::rng();
        self.breeds.get(index_dist.sample(&mut rng))
    }
}

impl ImageClassifier for DemoClassifier {
    fn tier(&self) -> Tier {
        Tier::Demo
    }

    fn classify(
        &self,
        _image: &ImageFile,
    ) -> Result<Option<Prediction>, Box<dyn std::error::Error + Send + Sync>> {
        let name = self
            .pick()
            .map(|breed| breed.name.en)
            .unwrap_or("Unknown breed");

        let _ = self.logger.info(&format!("Demo guess: {}", name));

        Ok(Some(Prediction {
            label: Label::Breed(name.to_string()),
            confidence: DEMO_CONFIDENCE,
            info: None,
            tier: Tier::Demo,
        }))
    }
}
