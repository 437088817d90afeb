use crate::identify::core::{init, transition, Effect, Event, Phase, State};
use crate::identify::tests::fixture::Fixture;
use crate::image_classifier::interface::{ImageFile, Label, Prediction, Tier};
use crate::image_classifier::pipeline::{Outcome, TierFailure};

fn selected() -> State {
    let (state, _) = init();
    let (state, _) = transition(state, Event::FileSelected(Fixture::image()));
    state
}

fn processing() -> State {
    let (state, _) = transition(selected(), Event::IdentifyClicked);
    state
}

fn prediction(label: Label, tier: Tier) -> Prediction {
    Prediction {
        label,
        confidence: 0.83,
        info: None,
        tier,
    }
}

fn remote_failure() -> TierFailure {
    TierFailure {
        tier: Tier::Remote,
        message: "API 500".to_string(),
    }
}

#[test]
fn test_init() {
    let (state, effects) = init();

    assert_eq!(state.phase, Phase::Idle);
    assert!(state.selected.is_none());
    assert!(!state.api_warning);
    assert!(effects.is_empty());
}

#[test]
fn test_identify_without_file_asks_for_upload() {
    let (state, _) = init();

    let (state, effects) = transition(state, Event::IdentifyClicked);

    assert_eq!(state.phase, Phase::NeedsFile);
    assert!(effects.is_empty());
}

#[test]
fn test_file_selection() {
    let state = selected();

    assert_eq!(state.phase, Phase::FileSelected);
    assert_eq!(state.selected, Some(Fixture::image()));
}

#[test]
fn test_identify_with_file_starts_request() {
    let (state, effects) = transition(selected(), Event::IdentifyClicked);

    assert_eq!(
        state.phase,
        Phase::Processing {
            image: Fixture::image()
        }
    );
    assert_eq!(
        effects,
        vec![Effect::Identify {
            image: Fixture::image()
        }]
    );
}

#[test]
fn test_identify_while_processing_is_ignored() {
    let (state, effects) = transition(processing(), Event::IdentifyClicked);

    assert!(state.is_processing());
    assert!(effects.is_empty());
}

#[test]
fn test_new_file_while_processing_keeps_request() {
    let other = ImageFile::new("murrah.png", vec![9]);

    let (state, effects) = transition(processing(), Event::FileSelected(other.clone()));

    assert_eq!(
        state.phase,
        Phase::Processing {
            image: Fixture::image()
        }
    );
    assert_eq!(state.selected, Some(other.clone()));
    assert_eq!(state.shown_file(), Some(&Fixture::image()));
    assert!(effects.is_empty());

    // the result belongs to the file that was sent, the new one waits
    let gir = prediction(Label::Breed("Gir".to_string()), Tier::Remote);
    let (state, _) = transition(
        state,
        Event::IdentifyDone(Outcome {
            prediction: Some(gir.clone()),
            answered_empty: None,
            failures: vec![],
        }),
    );

    assert_eq!(state.phase, Phase::Positive(gir));
    assert_eq!(state.shown_file(), Some(&Fixture::image()));

    let (state, effects) = transition(state, Event::IdentifyClicked);
    assert_eq!(effects, vec![Effect::Identify { image: other }]);
    assert!(state.is_processing());
}

#[test]
fn test_positive_result() {
    let gir = prediction(Label::Breed("Gir".to_string()), Tier::Remote);

    let (state, effects) = transition(
        processing(),
        Event::IdentifyDone(Outcome {
            prediction: Some(gir.clone()),
            answered_empty: None,
            failures: vec![],
        }),
    );

    assert_eq!(state.phase, Phase::Positive(gir));
    assert!(!state.api_warning);
    assert!(effects.is_empty());
}

#[test]
fn test_negative_result() {
    let negative = prediction(Label::NotApplicable, Tier::Remote);

    let (state, _) = transition(
        processing(),
        Event::IdentifyDone(Outcome {
            prediction: Some(negative.clone()),
            answered_empty: None,
            failures: vec![],
        }),
    );

    assert_eq!(state.phase, Phase::Negative(negative));
}

#[test]
fn test_empty_answer_is_no_result_without_warning() {
    let (state, _) = transition(
        processing(),
        Event::IdentifyDone(Outcome {
            prediction: None,
            answered_empty: Some(Tier::Remote),
            failures: vec![],
        }),
    );

    assert_eq!(state.phase, Phase::NoResult);
    assert!(!state.api_warning);
    assert_eq!(state.result_file, Some(Fixture::image()));
}

#[test]
fn test_all_tiers_failed_when_every_tier_failed() {
    let (state, _) = transition(
        processing(),
        Event::IdentifyDone(Outcome {
            prediction: None,
            answered_empty: None,
            failures: vec![remote_failure()],
        }),
    );

    assert_eq!(state.phase, Phase::AllTiersFailed);
    assert!(state.api_warning);
}

#[test]
fn test_api_warning_is_sticky() {
    let demo = prediction(Label::Breed("Gir".to_string()), Tier::Demo);
    let (state, _) = transition(
        processing(),
        Event::IdentifyDone(Outcome {
            prediction: Some(demo),
            answered_empty: None,
            failures: vec![remote_failure()],
        }),
    );
    assert!(state.api_warning);

    // the next request succeeds remotely, the warning stays
    let (state, _) = transition(state, Event::IdentifyClicked);
    let remote = prediction(Label::Breed("Gir".to_string()), Tier::Remote);
    let (state, _) = transition(
        state,
        Event::IdentifyDone(Outcome {
            prediction: Some(remote),
            answered_empty: None,
            failures: vec![],
        }),
    );

    assert!(state.api_warning);
}

#[test]
fn test_local_failure_does_not_warn() {
    let demo = prediction(Label::Breed("Gir".to_string()), Tier::Demo);

    let (state, _) = transition(
        processing(),
        Event::IdentifyDone(Outcome {
            prediction: Some(demo),
            answered_empty: None,
            failures: vec![TierFailure {
                tier: Tier::Local,
                message: "no model".to_string(),
            }],
        }),
    );

    assert!(!state.api_warning);
}

#[test]
fn test_stale_completion_is_ignored() {
    let state = selected();

    let (next, effects) = transition(
        state.clone(),
        Event::IdentifyDone(Outcome {
            prediction: None,
            answered_empty: None,
            failures: vec![],
        }),
    );

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn test_result_then_identify_again() {
    let gir = prediction(Label::Breed("Gir".to_string()), Tier::Local);
    let (state, _) = transition(
        processing(),
        Event::IdentifyDone(Outcome {
            prediction: Some(gir),
            answered_empty: None,
            failures: vec![],
        }),
    );

    let (state, effects) = transition(state, Event::IdentifyClicked);

    assert!(state.is_processing());
    assert_eq!(effects.len(), 1);
}
