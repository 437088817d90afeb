use crate::identify::render::View;
use std::error::Error;

/// A surface the identify view can be drawn on.
pub trait ResultDisplay: Send + Sync {
    /// Replace whatever was shown before with `view`.
    fn show(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>>;
}
