use crate::display::interface::ResultDisplay;
use crate::identify::render::View;
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::{Arc, Mutex};

pub struct ResultDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    shown: Arc<Mutex<Vec<View>>>,
}

impl ResultDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger,
            shown: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn shown(&self) -> Vec<View> {
        self.shown.lock().map(|views| views.clone()).unwrap_or_default()
    }
}

impl ResultDisplay for ResultDisplayFake {
    fn show(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("ResultDisplayFake::show({})", view.headline))?;
        self.shown
            .lock()
            .map_err(|e| e.to_string())?
            .push(view.clone());
        Ok(())
    }
}
