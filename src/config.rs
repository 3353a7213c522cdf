use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::cli::Arguments;

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Resolved runtime configuration.
///
/// The API key is always explicit (flag or environment); nothing is ever
/// persisted to disk between runs.
#[derive(Debug, Clone)]
pub struct Config {
    // OpenAI
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub openai_model: String,

    // Inputs
    pub input_file: PathBuf,
    pub languages_file: PathBuf,
    pub template_file: PathBuf,
    pub extra_information: String,

    // Outputs
    pub assets_folder: PathBuf,
    pub translations_output: PathBuf,
}

impl Config {
    /// Build a config from parsed CLI arguments, validating every input
    /// path up front so the run fails before any network or write happens.
    pub fn from_args(args: Arguments) -> Result<Self> {
        let Some(openai_api_key) = args.api_key.filter(|k| !k.is_empty()) else {
            bail!("No OpenAI API key provided. Pass --api-key or set OPENAI_API_KEY.");
        };

        require_file(&args.input_file)?;
        require_dir(&args.assets_folder)?;
        require_file(&args.languages_file)?;
        require_file(&args.template_file)?;

        Ok(Self {
            openai_api_key,
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),
            openai_model: args.model,
            input_file: args.input_file,
            languages_file: args.languages_file,
            template_file: args.template_file,
            extra_information: args.extra_information,
            assets_folder: args.assets_folder,
            translations_output: args.translations_output,
        })
    }
}

fn require_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        bail!("{} is not a valid file", path.display());
    }
    Ok(())
}

fn require_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        bail!("{} is not a valid directory", path.display());
    }
    Ok(())
}
