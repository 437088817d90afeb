use crate::image_classifier::interface::{ImageFile, Label, Prediction};
use crate::image_classifier::pipeline::Outcome;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    FileSelected,
    /// Identify was pressed with nothing selected.
    NeedsFile,
    /// `image` is the file the request was sent for.
    Processing { image: ImageFile },
    Positive(Prediction),
    Negative(Prediction),
    /// A tier answered without a prediction.
    NoResult,
    /// Every tier failed or was unavailable.
    AllTiersFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub phase: Phase,
    pub selected: Option<ImageFile>,
    /// The file the current result was computed for.
    pub result_file: Option<ImageFile>,
    /// Set once the remote tier fails and kept for the rest of the session.
    pub api_warning: bool,
}

impl State {
    pub fn is_processing(&self) -> bool {
        matches!(self.phase, Phase::Processing { .. })
    }

    /// The file the current phase is about: the in-flight one while
    /// processing, the answered one for a result, otherwise the selection.
    pub fn shown_file(&self) -> Option<&ImageFile> {
        match &self.phase {
            Phase::Processing { image } => Some(image),
            Phase::Positive(_) | Phase::Negative(_) | Phase::NoResult | Phase::AllTiersFailed => {
                self.result_file.as_ref().or(self.selected.as_ref())
            }
            Phase::Idle | Phase::FileSelected | Phase::NeedsFile => self.selected.as_ref(),
        }
    }
}

#[derive(Debug)]
pub enum Event {
    FileSelected(ImageFile),
    IdentifyClicked,
    IdentifyDone(Outcome),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Identify { image: ImageFile },
}

pub fn init() -> (State, Vec<Effect>) {
    (
        State {
            phase: Phase::Idle,
            selected: None,
            result_file: None,
            api_warning: false,
        },
        vec![],
    )
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state.phase.clone(), event) {
        // A new file while a request is in flight is kept for the next click
        (Phase::Processing { .. }, Event::FileSelected(image)) => (
            State {
                selected: Some(image),
                ..state
            },
            vec![],
        ),
        (_, Event::FileSelected(image)) => (
            State {
                phase: Phase::FileSelected,
                selected: Some(image),
                ..state
            },
            vec![],
        ),

        // One request at a time
        (Phase::Processing { .. }, Event::IdentifyClicked) => (state, vec![]),
        (_, Event::IdentifyClicked) => match state.selected.clone() {
            None => (
                State {
                    phase: Phase::NeedsFile,
                    ..state
                },
                vec![],
            ),
            Some(image) => (
                State {
                    phase: Phase::Processing {
                        image: image.clone(),
                    },
                    ..state
                },
                vec![Effect::Identify { image }],
            ),
        },

        (Phase::Processing { image }, Event::IdentifyDone(outcome)) => {
            let api_warning = state.api_warning || outcome.remote_failed();
            let phase = match outcome.prediction {
                Some(prediction) if prediction.label == Label::NotApplicable => {
                    Phase::Negative(prediction)
                }
                Some(prediction) => Phase::Positive(prediction),
                None if outcome.answered_empty.is_some() => Phase::NoResult,
                None => Phase::AllTiersFailed,
            };
            (
                State {
                    phase,
                    result_file: Some(image),
                    api_warning,
                    ..state
                },
                vec![],
            )
        }

        // Stale completion with nothing in flight
        (_, Event::IdentifyDone(_)) => (state, vec![]),
    }
}
