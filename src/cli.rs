//! Command-line interface definition using clap's derive API.

use std::path::PathBuf;

use clap::Parser;

/// Translate an English strings file and copy the results into the
/// per-language `Localizable.strings` files of an Xcode project.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Path to the input file containing the strings to localize, in English (US)
    pub input_file: PathBuf,

    /// Path to the assets folder of the Xcode project
    pub assets_folder: PathBuf,

    /// OpenAI API key. Falls back to the OPENAI_API_KEY environment variable
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to the file listing the target languages, one per line
    #[arg(long, default_value = "languages_list.txt")]
    pub languages_file: PathBuf,

    /// Path to the prompt template file
    #[arg(long, default_value = "template.txt")]
    pub template_file: PathBuf,

    /// Extra instructions to include in the prompt
    #[arg(long, default_value = "")]
    pub extra_information: String,

    /// The OpenAI model to use
    #[arg(long, default_value = "gpt-4o-mini")]
    pub model: String,

    /// Path where the raw model reply is written for auditing
    #[arg(long, default_value = "translations.txt")]
    pub translations_output: PathBuf,
}
