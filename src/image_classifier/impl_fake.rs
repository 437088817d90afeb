use crate::image_classifier::interface::{ImageClassifier, ImageFile, Label, Prediction, Tier};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted tier for exercising the pipeline and the identify flow.
pub struct FakeImageClassifier {
    tier: Tier,
    available: bool,
    outcome: Result<Option<(Label, f32)>, String>,
    delay: Duration,
    calls: AtomicUsize,
}

impl FakeImageClassifier {
    pub fn answering(tier: Tier, label: Label, confidence: f32) -> Self {
        Self {
            tier,
            available: true,
            outcome: Ok(Some((label, confidence))),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Answers, but without a prediction.
    pub fn empty(tier: Tier) -> Self {
        Self {
            outcome: Ok(None),
            ..Self::failing(tier, "empty")
        }
    }

    pub fn failing(tier: Tier, message: &str) -> Self {
        Self {
            tier,
            available: true,
            outcome: Err(message.to_string()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable(tier: Tier) -> Self {
        Self {
            available: false,
            ..Self::failing(tier, "unavailable")
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageClassifier for FakeImageClassifier {
    fn tier(&self) -> Tier {
        self.tier
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn classify(
        &self,
        _image: &ImageFile,
    ) -> Result<Option<Prediction>, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        match &self.outcome {
            Ok(Some((label, confidence))) => Ok(Some(Prediction {
                label: label.clone(),
                confidence: *confidence,
                info: None,
                tier: self.tier,
            })),
            Ok(None) => Ok(None),
            Err(message) => Err(message.clone().into()),
        }
    }
}
