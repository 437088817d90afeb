pub mod commands;

use crate::app::App;
use crate::catalogue::{self, BreedEntry, BreedKind};
use crate::display::impl_console::ResultDisplayConsole;
use crate::display::impl_gui::{self, IdentifyWindow};
use crate::display::interface::ResultDisplay;
use crate::identify::core::Event;
use crate::identify::main::IdentifyFlow;
use crate::identify::render::{render, View};
use crate::image_classifier::interface::ImageFile;
use crate::language::preference::LanguagePreference;
use crate::language::translations::Message;
use crate::language::Language;
use clap::Parser;
use commands::{BreedsArgs, Commands, IdentifyArgs, LangAction, LangArgs};
use std::error::Error;
use std::time::Duration;

/// Extra time allowed past the remote timeout for the local model and demo tiers.
const LOCAL_TIERS_ALLOWANCE: Duration = Duration::from_secs(120);

#[derive(Parser, Debug)]
#[command(
    name = "breed-identifier",
    version,
    about = "Identify Indian cattle and buffalo breeds from a photo."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self, app: &App) -> Result<(), Box<dyn Error + Send + Sync>> {
        match self.command {
            Commands::Identify(args) => run_identify(app, args),
            Commands::Gui => run_gui(app),
            Commands::Breeds(args) => run_breeds(app, args),
            Commands::Lang(args) => run_lang(app, args),
            Commands::Health => run_health(app),
        }
    }
}

/// An explicit `--lang` must be supported; otherwise the saved preference applies.
pub fn resolve_language(
    flag: Option<&str>,
    preference: &LanguagePreference,
) -> Result<Language, Box<dyn Error + Send + Sync>> {
    match flag {
        Some(code) => Language::from_code(code).ok_or_else(|| unsupported_language(code)),
        None => Ok(preference.get()),
    }
}

fn unsupported_language(code: &str) -> Box<dyn Error + Send + Sync> {
    let supported: Vec<_> = Language::all().iter().map(|l| l.code()).collect();
    format!(
        "Unsupported language '{}' (expected one of {})",
        code,
        supported.join(", ")
    )
    .into()
}

/// Runs one identify action to completion and shows the result.
pub fn identify_and_show(
    flow: &mut IdentifyFlow,
    image: ImageFile,
    language: Language,
    timeout: Duration,
    display: &mut dyn ResultDisplay,
) -> Result<View, Box<dyn Error + Send + Sync>> {
    flow.send(Event::FileSelected(image));
    flow.send(Event::IdentifyClicked);
    flow.settle(timeout)?;

    let view = render(flow.state(), language);
    display.show(&view)?;
    Ok(view)
}

fn run_identify(app: &App, args: IdentifyArgs) -> Result<(), Box<dyn Error + Send + Sync>> {
    let language = resolve_language(args.lang.as_deref(), &app.preference)?;
    let image = ImageFile::read(&args.image)
        .map_err(|e| format!("Could not read {}: {}", args.image.display(), e))?;

    let mut flow = IdentifyFlow::new(app.pipeline()?, app.logger.clone());
    let mut display = ResultDisplayConsole::new();

    identify_and_show(
        &mut flow,
        image,
        language,
        app.config.remote_timeout + LOCAL_TIERS_ALLOWANCE,
        &mut display,
    )?;
    Ok(())
}

fn run_gui(app: &App) -> Result<(), Box<dyn Error + Send + Sync>> {
    let flow = IdentifyFlow::new(app.pipeline()?, app.logger.clone());
    let window = IdentifyWindow::new(flow, app.preference.clone(), app.logger.clone());
    impl_gui::run(window)
}

fn run_breeds(app: &App, args: BreedsArgs) -> Result<(), Box<dyn Error + Send + Sync>> {
    let language = resolve_language(args.lang.as_deref(), &app.preference)?;

    let lines = match args.slug.as_deref() {
        Some(slug) => {
            let entry = catalogue::by_slug(slug)
                .or_else(|| catalogue::find_by_label(slug))
                .ok_or_else(|| format!("Unknown breed '{}'", slug))?;
            breed_detail_lines(entry, language)
        }
        None => breed_list_lines(language),
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

pub fn breed_list_lines(language: Language) -> Vec<String> {
    let mut lines = Vec::new();

    for (kind, heading) in [
        (BreedKind::Cattle, Message::CattleHeading),
        (BreedKind::Buffalo, Message::BuffaloHeading),
    ] {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(heading.text(language).to_string());
        for entry in catalogue::by_kind(kind) {
            lines.push(format!("  {:<14} {}", entry.slug, entry.name.get(language)));
        }
    }

    lines
}

pub fn breed_detail_lines(entry: &BreedEntry, language: Language) -> Vec<String> {
    vec![
        entry.name.get(language).to_string(),
        entry.description.get(language).to_string(),
        String::new(),
        format!("{}: {}", Message::MilkProduction.text(language), entry.milk_yield),
        format!("{}: {}", Message::BestTraits.text(language), entry.traits),
        format!("{}: {}", Message::BestPairedWith.text(language), entry.companion),
        format!("{}: {}", Message::EstimatedCost.text(language), entry.cost_range),
    ]
}

fn run_lang(app: &App, args: LangArgs) -> Result<(), Box<dyn Error + Send + Sync>> {
    match args.action {
        None => {
            let language = app.preference.get();
            println!("{} ({})", language.code(), language.native_name());
        }
        Some(LangAction::Set { code }) => {
            let language = Language::from_code(&code).ok_or_else(|| unsupported_language(&code))?;
            app.preference.set(language)?;
            println!("{} ({})", language.code(), language.native_name());
        }
    }
    Ok(())
}

fn run_health(app: &App) -> Result<(), Box<dyn Error + Send + Sync>> {
    let health = app.remote_classifier()?.health()?;
    println!(
        "{}: status {}, model loaded: {}",
        app.config.api_base,
        health.status,
        health.model_loaded.as_deref().unwrap_or("unknown")
    );
    Ok(())
}
