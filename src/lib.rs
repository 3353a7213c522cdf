pub mod cli;
pub mod config;
pub mod distribute;
pub mod openai;
pub mod parser;
pub mod template;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::config::Config;

/// Run the full localization pipeline: render the prompt, call the
/// completion endpoint, persist the raw reply for auditing, parse it and
/// append the results into the Xcode project.
pub async fn run(config: &Config) -> Result<()> {
    let instructions = template::build_instructions(
        &config.template_file,
        &config.languages_file,
        &config.input_file,
        &config.extra_information,
    )?;

    info!(model = %config.openai_model, "Requesting translations from OpenAI");
    let client = reqwest::Client::new();
    let translations = openai::request_translations(&client, config, &instructions).await?;

    if translations.is_empty() {
        bail!("No translations were generated.");
    }

    info!(
        "Writing raw translations to {}",
        config.translations_output.display()
    );
    std::fs::write(&config.translations_output, &translations).with_context(|| {
        format!(
            "Failed to write translations to {}",
            config.translations_output.display()
        )
    })?;

    let localizations = parser::parse_translations(&translations);
    if localizations.skipped_lines() > 0 {
        warn!(
            skipped = localizations.skipped_lines(),
            "Some reply lines did not parse as translations and were dropped"
        );
    }

    info!(
        languages = localizations.blocks().len(),
        "Copying localization strings to the Xcode project"
    );
    distribute::copy_to_project(&localizations, &config.assets_folder)?;

    info!("Successfully copied localization strings to the Xcode project");
    Ok(())
}
