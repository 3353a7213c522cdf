//! Prompt template rendering.
//!
//! The template file contains `{languages}`, `{extra_information}` and
//! `{strings}` placeholders. Doubled braces (`{{`, `}}`) render as literal
//! braces. Referencing a placeholder that was not supplied is an error, so a
//! typo in the template surfaces before any API call is made.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("template references unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),
    #[error("unmatched '{{' in template")]
    UnmatchedOpenBrace,
    #[error("unmatched '}}' in template")]
    UnmatchedCloseBrace,
}

/// Values substituted into the prompt template.
#[derive(Debug, Clone)]
pub struct PromptValues {
    pub languages: String,
    pub extra_information: String,
    pub strings: String,
}

impl PromptValues {
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "languages" => Some(&self.languages),
            "extra_information" => Some(&self.extra_information),
            "strings" => Some(&self.strings),
            _ => None,
        }
    }
}

/// Substitute placeholder tokens in `template` with the supplied values.
pub fn render(template: &str, values: &PromptValues) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + values.strings.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => return Err(TemplateError::UnmatchedOpenBrace),
                    }
                }
                match values.lookup(&name) {
                    Some(value) => out.push_str(value),
                    None => return Err(TemplateError::UnknownPlaceholder(name)),
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(TemplateError::UnmatchedCloseBrace);
                }
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Read the template, languages and strings files and render the
/// localization instructions that become the user prompt.
pub fn build_instructions(
    template_file: &Path,
    languages_file: &Path,
    strings_file: &Path,
    extra_information: &str,
) -> Result<String> {
    let template = fs::read_to_string(template_file)
        .with_context(|| format!("Failed to read template file {}", template_file.display()))?;

    // One language per line, each preceded by a '*'. Passed through to the
    // prompt verbatim.
    let languages = fs::read_to_string(languages_file)
        .with_context(|| format!("Failed to read languages file {}", languages_file.display()))?;

    let strings = fs::read_to_string(strings_file)
        .with_context(|| format!("Failed to read strings file {}", strings_file.display()))?;

    let values = PromptValues {
        languages,
        extra_information: extra_information.to_string(),
        strings,
    };

    render(&template, &values)
        .with_context(|| format!("Failed to render template {}", template_file.display()))
}
