use app::App;
use clap::Parser;
use cli::Cli;
use config::Config;
use library::logger::impl_console::LoggerConsole;
use std::sync::Arc;

mod app;
mod catalogue;
mod cli;
mod config;
mod display;
mod identify;
mod image_classifier;
mod language;
mod library;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let config = Config::from_env();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let app = App::new(config, logger);

    cli.run(&app)
}
