//! Appending parsed translations into the Xcode project's per-language
//! `Localizable.strings` files.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::parser::Localizations;

/// Append every language's entries to
/// `<assets_folder>/<language>.lproj/Localizable.strings`.
///
/// The file is created if missing, but the `.lproj` directory must already
/// exist in the project. Entries are appended as-is: existing keys are never
/// deduplicated, and a failure partway through leaves earlier languages
/// already written.
pub fn copy_to_project(localizations: &Localizations, assets_folder: &Path) -> Result<()> {
    for block in localizations.blocks() {
        let destination = assets_folder
            .join(format!("{}.lproj", block.language))
            .join("Localizable.strings");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&destination)
            .with_context(|| format!("Failed to open {}", destination.display()))?;

        for entry in &block.entries {
            writeln!(file, "{}", entry)
                .with_context(|| format!("Failed to write to {}", destination.display()))?;
        }

        debug!(
            language = %block.language,
            entries = block.entries.len(),
            "appended translations to {}",
            destination.display()
        );
    }

    Ok(())
}
