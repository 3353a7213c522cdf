//! Parsing of the raw model reply into per-language entry groups.
//!
//! The reply is expected to look like:
//!
//! ```text
//! // French
//! "greeting" = "Bonjour";
//! "farewell" = "Au revoir";
//! // German
//! "greeting" = "Hallo";
//! ```
//!
//! A `//` marker line opens a language block; every following line that
//! contains `=` belongs to that block. Anything else (prose before the first
//! marker, blank lines, lines without `=`) is dropped, but the drops are
//! counted so the pipeline can report them.

/// Marker prefix that opens a new language block.
const LANGUAGE_MARKER: &str = "//";

/// Entries of one language block, in appearance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageBlock {
    pub language: String,
    pub entries: Vec<String>,
}

/// Ordered per-language translation groups parsed from one model reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Localizations {
    blocks: Vec<LanguageBlock>,
    skipped_lines: usize,
}

impl Localizations {
    /// Blocks in the order their markers first appeared.
    pub fn blocks(&self) -> &[LanguageBlock] {
        &self.blocks
    }

    /// Lines that matched no block (prose, blanks, entries before the first
    /// marker).
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, language: &str) -> Option<&[String]> {
        self.blocks
            .iter()
            .find(|b| b.language == language)
            .map(|b| b.entries.as_slice())
    }

    fn open_block(&mut self, language: String) -> usize {
        // A repeated marker restarts that language's block rather than
        // extending it, matching how a fresh list replaces the old one.
        if let Some(idx) = self.blocks.iter().position(|b| b.language == language) {
            self.blocks[idx].entries.clear();
            idx
        } else {
            self.blocks.push(LanguageBlock {
                language,
                entries: Vec::new(),
            });
            self.blocks.len() - 1
        }
    }
}

/// Scan the raw reply line by line and group entry lines under the most
/// recent language marker. Never fails; unparseable input yields an empty
/// result.
pub fn parse_translations(raw: &str) -> Localizations {
    let mut localizations = Localizations::default();
    let mut current: Option<usize> = None;

    for line in raw.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(LANGUAGE_MARKER) {
            // No normalization: "// french" and "// French" are distinct.
            let language = rest.trim().to_string();
            current = Some(localizations.open_block(language));
        } else if line.contains('=') {
            match current {
                Some(idx) => localizations.blocks[idx].entries.push(line.to_string()),
                None => localizations.skipped_lines += 1,
            }
        } else if !line.is_empty() {
            localizations.skipped_lines += 1;
        }
    }

    localizations
}
