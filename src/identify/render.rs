use crate::catalogue;
use crate::identify::core::{Phase, State};
use crate::image_classifier::interface::{BreedInfo, Label, Prediction, Tier};
use crate::language::translations::Message;
use crate::language::Language;

/// Shown for every negative result regardless of the reported probability.
pub const NEGATIVE_CONFIDENCE_PERCENT: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Demo,
    Negative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoSection {
    pub title: String,
    pub text: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoPanel {
    pub title: String,
    pub sections: Vec<InfoSection>,
    /// Set when every section was empty.
    pub empty_message: Option<String>,
}

/// Everything a display needs to draw the identify area, already localised.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub headline: String,
    pub tone: Tone,
    pub file_name: Option<String>,
    pub confidence: Option<u8>,
    pub info_panel: Option<InfoPanel>,
    /// (field label, value) pairs from the matching catalogue entry.
    pub catalogue_hint: Vec<(String, String)>,
    pub warning: Option<String>,
    pub processing: bool,
    pub can_identify: bool,
}

/// Integer percent in [0, 100]. NaN maps to 0.
pub fn clamp_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

pub fn render(state: &State, language: Language) -> View {
    let mut view = View {
        headline: String::new(),
        tone: Tone::Neutral,
        file_name: state.shown_file().map(|image| image.name.clone()),
        confidence: None,
        info_panel: None,
        catalogue_hint: vec![],
        warning: state
            .api_warning
            .then(|| Message::ApiWarning.text(language).to_string()),
        processing: state.is_processing(),
        can_identify: state.selected.is_some() && !state.is_processing(),
    };

    match &state.phase {
        Phase::Idle => {
            view.headline = Message::SelectImage.text(language).to_string();
        }
        Phase::FileSelected => {}
        Phase::NeedsFile => {
            view.headline = Message::PleaseUpload.text(language).to_string();
        }
        Phase::Processing { .. } => {
            view.headline = Message::Processing.text(language).to_string();
        }
        Phase::NoResult => {
            view.headline = Message::NoResult.text(language).to_string();
        }
        Phase::AllTiersFailed => {
            view.headline = Message::AllTiersFailed.text(language).to_string();
        }
        Phase::Negative(_) => {
            view.headline = Message::NotCattle.text(language).to_string();
            view.tone = Tone::Negative;
            view.confidence = Some(NEGATIVE_CONFIDENCE_PERCENT);
        }
        Phase::Positive(prediction) => render_positive(&mut view, prediction, language),
    }

    view
}

fn render_positive(view: &mut View, prediction: &Prediction, language: Language) {
    let label = match &prediction.label {
        Label::Breed(label) => label.as_str(),
        Label::NotApplicable => crate::image_classifier::interface::NOT_APPLICABLE_LABEL,
    };

    let (message, tone) = match prediction.tier {
        Tier::Demo => (Message::PredictedDemo, Tone::Demo),
        Tier::Remote | Tier::Local => (Message::PredictedBreed, Tone::Positive),
    };

    view.headline = message.with_label(language, label);
    view.tone = tone;
    view.confidence = Some(clamp_percent(f64::from(prediction.confidence) * 100.0));
    view.info_panel = prediction
        .info
        .as_ref()
        .map(|info| render_info_panel(info, language));

    if let Some(entry) = catalogue::find_by_label(label) {
        view.catalogue_hint = vec![
            (
                Message::MilkProduction.text(language).to_string(),
                entry.milk_yield.to_string(),
            ),
            (
                Message::EstimatedCost.text(language).to_string(),
                entry.cost_range.to_string(),
            ),
        ];
    }
}

fn render_info_panel(info: &BreedInfo, language: Language) -> InfoPanel {
    let mut sections = Vec::new();

    if let Some(description) = info
        .description
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
    {
        sections.push(InfoSection {
            title: Message::Description.text(language).to_string(),
            text: Some(description.to_string()),
            items: vec![],
        });
    }

    let lists = [
        (Message::Characteristics, &info.characteristics),
        (Message::FodderRequirements, &info.fodder_requirements),
        (Message::GovernmentSchemes, &info.government_schemes),
        (Message::BestPractices, &info.best_practices),
    ];
    for (title, items) in lists {
        if items.is_empty() {
            continue;
        }
        sections.push(InfoSection {
            title: title.text(language).to_string(),
            text: None,
            items: items.clone(),
        });
    }

    let empty_message = sections
        .is_empty()
        .then(|| Message::NoDetailedInfo.text(language).to_string());

    InfoPanel {
        title: Message::BreedDetails.text(language).to_string(),
        sections,
        empty_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identify::core::init;
    use crate::image_classifier::interface::ImageFile;

    fn state_with(phase: Phase) -> State {
        State {
            phase,
            selected: Some(ImageFile::new("cow.jpg", vec![1, 2, 3])),
            result_file: None,
            api_warning: false,
        }
    }

    fn prediction(label: Label, confidence: f32, tier: Tier) -> Prediction {
        Prediction {
            label,
            confidence,
            info: None,
            tier,
        }
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(83.0), 83);
        assert_eq!(clamp_percent(82.6), 83);
        assert_eq!(clamp_percent(-4.0), 0);
        assert_eq!(clamp_percent(170.0), 100);
        assert_eq!(clamp_percent(f64::NAN), 0);
        assert_eq!(clamp_percent(f64::INFINITY), 100);
    }

    #[test]
    fn test_positive_remote_result() {
        let state = state_with(Phase::Positive(prediction(
            Label::Breed("Gir".to_string()),
            0.83,
            Tier::Remote,
        )));

        let view = render(&state, Language::English);

        assert_eq!(view.headline, "Predicted Breed: Gir");
        assert_eq!(view.tone, Tone::Positive);
        assert_eq!(view.confidence, Some(83));
        assert!(view.info_panel.is_none());
        assert!(view.can_identify);
        assert!(!view.processing);
    }

    #[test]
    fn test_negative_result_uses_fixed_confidence() {
        let state = state_with(Phase::Negative(prediction(
            Label::NotApplicable,
            0.5,
            Tier::Remote,
        )));

        let view = render(&state, Language::English);

        assert_eq!(
            view.headline,
            "❌ This doesn't appear to be a cow or buffalo. Please upload a clear image of cattle."
        );
        assert_eq!(view.tone, Tone::Negative);
        assert_eq!(view.confidence, Some(15));
        assert!(view.info_panel.is_none());
        assert!(view.catalogue_hint.is_empty());
    }

    #[test]
    fn test_demo_result() {
        let state = state_with(Phase::Positive(prediction(
            Label::Breed("Sahiwal".to_string()),
            crate::image_classifier::impl_demo::DEMO_CONFIDENCE,
            Tier::Demo,
        )));

        let view = render(&state, Language::English);

        assert_eq!(view.headline, "Predicted (demo): Sahiwal");
        assert_eq!(view.tone, Tone::Demo);
        assert_eq!(view.confidence, Some(15));
    }

    #[test]
    fn test_out_of_range_confidence_is_clamped() {
        let state = state_with(Phase::Positive(prediction(
            Label::Breed("Gir".to_string()),
            f32::NAN,
            Tier::Local,
        )));

        assert_eq!(render(&state, Language::English).confidence, Some(0));
    }

    #[test]
    fn test_empty_info_sections_are_omitted() {
        let mut positive = prediction(Label::Breed("Gir".to_string()), 0.9, Tier::Remote);
        positive.info = Some(BreedInfo {
            description: Some("Hardy zebu".to_string()),
            characteristics: vec![],
            fodder_requirements: vec!["Green fodder".to_string()],
            government_schemes: vec![],
            best_practices: vec![],
        });

        let view = render(&state_with(Phase::Positive(positive)), Language::English);
        let panel = view.info_panel.unwrap();

        let titles: Vec<_> = panel.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Description", "Fodder requirements"]);
        assert!(panel.empty_message.is_none());
    }

    #[test]
    fn test_all_empty_info_shows_placeholder() {
        let mut positive = prediction(Label::Breed("Gir".to_string()), 0.9, Tier::Remote);
        positive.info = Some(BreedInfo {
            description: Some("   ".to_string()),
            ..BreedInfo::default()
        });

        let view = render(&state_with(Phase::Positive(positive)), Language::English);
        let panel = view.info_panel.unwrap();

        assert!(panel.sections.is_empty());
        assert_eq!(
            panel.empty_message.as_deref(),
            Some("No detailed info available for this breed.")
        );
    }

    #[test]
    fn test_catalogue_hint_for_known_breed() {
        let state = state_with(Phase::Positive(prediction(
            Label::Breed("murrah_buffalo".to_string()),
            0.7,
            Tier::Local,
        )));

        let view = render(&state, Language::English);
        let murrah = catalogue::by_slug("murrah").unwrap();

        assert_eq!(
            view.catalogue_hint,
            vec![
                ("Milk Production".to_string(), murrah.milk_yield.to_string()),
                ("Estimated Cost".to_string(), murrah.cost_range.to_string()),
            ]
        );
    }

    #[test]
    fn test_no_catalogue_hint_for_unknown_label() {
        let state = state_with(Phase::Positive(prediction(
            Label::Breed("Class 4".to_string()),
            0.7,
            Tier::Local,
        )));

        assert!(render(&state, Language::English).catalogue_hint.is_empty());
    }

    #[test]
    fn test_processing_disables_identify() {
        let view = render(
            &state_with(Phase::Processing {
                image: ImageFile::new("cow.jpg", vec![1, 2, 3]),
            }),
            Language::English,
        );

        assert!(view.processing);
        assert!(!view.can_identify);
        assert_eq!(view.headline, "Processing...");
    }

    #[test]
    fn test_processing_shows_in_flight_file_name() {
        let state = State {
            phase: Phase::Processing {
                image: ImageFile::new("first.jpg", vec![1]),
            },
            selected: Some(ImageFile::new("second.jpg", vec![2])),
            result_file: None,
            api_warning: false,
        };

        assert_eq!(
            render(&state, Language::English).file_name.as_deref(),
            Some("first.jpg")
        );

        let state = State {
            phase: Phase::NoResult,
            result_file: Some(ImageFile::new("first.jpg", vec![1])),
            ..state
        };
        assert_eq!(
            render(&state, Language::English).file_name.as_deref(),
            Some("first.jpg")
        );
    }

    #[test]
    fn test_identify_needs_a_selected_file() {
        assert!(!render(&init().0, Language::English).can_identify);

        let state = State {
            phase: Phase::NeedsFile,
            ..init().0
        };
        assert!(!render(&state, Language::English).can_identify);

        assert!(render(&state_with(Phase::FileSelected), Language::English).can_identify);
    }

    #[test]
    fn test_needs_file_and_idle() {
        let (initial, _) = init();
        assert_eq!(
            render(&initial, Language::English).headline,
            Message::SelectImage.text(Language::English)
        );

        let state = State {
            phase: Phase::NeedsFile,
            ..initial
        };
        assert_eq!(
            render(&state, Language::English).headline,
            "Please upload an image first."
        );
    }

    #[test]
    fn test_api_warning_is_localised() {
        let state = State {
            api_warning: true,
            ..state_with(Phase::AllTiersFailed)
        };

        let view = render(&state, Language::Hindi);

        assert_eq!(
            view.warning.as_deref(),
            Some(Message::ApiWarning.text(Language::Hindi))
        );
        assert_eq!(view.headline, Message::AllTiersFailed.text(Language::Hindi));
    }

    #[test]
    fn test_empty_answer_has_its_own_message() {
        let view = render(&state_with(Phase::NoResult), Language::English);

        assert_eq!(view.headline, "No prediction returned by API.");
        assert_eq!(view.tone, Tone::Neutral);
        assert!(view.confidence.is_none());
        assert!(view.warning.is_none());
    }

    #[test]
    fn test_unknown_preference_renders_english() {
        let language = Language::from_code_or_default(Some("fr"));
        let state = state_with(Phase::Positive(prediction(
            Label::Breed("Gir".to_string()),
            0.83,
            Tier::Remote,
        )));

        assert_eq!(render(&state, language).headline, "Predicted Breed: Gir");
    }
}
