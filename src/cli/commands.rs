use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Identify the breed in one image and print the result
    Identify(IdentifyArgs),

    /// Open the identify window
    Gui,

    /// List catalogue breeds, or show one
    Breeds(BreedsArgs),

    /// Show or change the saved language
    Lang(LangArgs),

    /// Ask the prediction service whether it is up
    Health,
}

#[derive(Args, Debug)]
pub struct IdentifyArgs {
    /// Image file to identify
    pub image: PathBuf,

    /// Language for this run only (en, hi, mr, gu)
    #[arg(long)]
    pub lang: Option<String>,
}

#[derive(Args, Debug)]
pub struct BreedsArgs {
    /// Show a single breed by slug, e.g. `gir`
    #[arg(long)]
    pub slug: Option<String>,

    /// Language for this run only (en, hi, mr, gu)
    #[arg(long)]
    pub lang: Option<String>,
}

#[derive(Args, Debug)]
pub struct LangArgs {
    #[command(subcommand)]
    pub action: Option<LangAction>,
}

#[derive(Subcommand, Debug)]
pub enum LangAction {
    /// Save the language used by later runs
    Set { code: String },
}
