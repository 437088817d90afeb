use crate::identify::core::{Effect, Event};
use crate::image_classifier::pipeline::Pipeline;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    pipeline: Pipeline,
    logger: Arc<dyn Logger + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        pipeline: Pipeline,
        logger: Arc<dyn Logger + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            pipeline,
            logger,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::Identify { image } => {
                let outcome = self.pipeline.identify(&image);
                let _ = self.event_sender.send(Event::IdentifyDone(outcome));
            }
        }
    }

    pub fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect));
        }
    }
}
