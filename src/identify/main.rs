use crate::identify::core::{init, transition, Event, State};
use crate::identify::run_effect::RunEffect;
use crate::image_classifier::pipeline::Pipeline;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Owns the identify state and feeds completed effects back into it.
pub struct IdentifyFlow {
    state: State,
    event_receiver: Receiver<Event>,
    run_effect: RunEffect,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl IdentifyFlow {
    pub fn new(pipeline: Pipeline, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let logger = logger.with_namespace("identify");
        let (event_sender, event_receiver) = channel();
        let run_effect = RunEffect::new(pipeline, logger.clone(), event_sender);
        let (state, effects) = init();
        run_effect.spawn_effects(effects);

        Self {
            state,
            event_receiver,
            run_effect,
            logger,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn send(&mut self, event: Event) {
        let _ = self.logger.info(&format!(
            "\nold phase:\n\t{:?}\n\nevent:\n\t{:?}",
            self.state.phase, event,
        ));

        let (new_state, effects) = transition(self.state.clone(), event);

        let _ = self.logger.info(&format!(
            "\nnew phase:\n\t{:?}\n\neffects:\n\t{:?}",
            new_state.phase, effects
        ));

        self.state = new_state;
        self.run_effect.spawn_effects(effects);
    }

    /// Applies every completed effect without blocking. Returns whether anything arrived.
    pub fn poll(&mut self) -> bool {
        let mut received = false;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.send(event);
            received = true;
        }
        received
    }

    /// Blocks until no request is in flight or `timeout` passes.
    pub fn settle(
        &mut self,
        timeout: Duration,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let deadline = Instant::now() + timeout;

        while self.state.is_processing() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.event_receiver.recv_timeout(remaining) {
                Ok(event) => self.send(event),
                Err(RecvTimeoutError::Timeout) => {
                    return Err("Timed out waiting for a prediction".into())
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err("Identify worker disconnected".into())
                }
            }
        }

        Ok(())
    }
}
