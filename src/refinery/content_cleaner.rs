// * Narrative Extraction & Markdown Cleanup
// * Cuts the narrative section out of a scraped page and strips markdown artifacts.

use crate::config::constants::{NARRATIVE_END_MARKER, NARRATIVE_START_MARKER};
use regex::Regex;
use std::sync::LazyLock;

// * Patterns stay on a single line, matching how the scraped markdown is laid out
static PATTERN_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("Invalid image regex"));

static PATTERN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\(.*?\)").expect("Invalid link regex"));

static PATTERN_READ_MORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Read more").expect("Invalid read-more regex"));

static PATTERN_BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("Invalid blank-line regex"));

/// Configuration for narrative extraction
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    /// Everything up to and including this marker is dropped
    pub start_marker: String,
    /// This marker and everything after it is dropped
    pub end_marker: String,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            start_marker: NARRATIVE_START_MARKER.to_string(),
            end_marker: NARRATIVE_END_MARKER.to_string(),
        }
    }
}

/// Extracts and cleans the narrative portion of a scraped page
pub struct ContentCleaner {
    config: CleanerConfig,
}

impl ContentCleaner {
    /// Creates a new cleaner with default markers
    pub fn new() -> Self {
        Self {
            config: CleanerConfig::default(),
        }
    }

    /// Creates a new cleaner with custom markers
    pub fn with_config(config: CleanerConfig) -> Self {
        Self { config }
    }

    /// Narrative section, cleaned of markdown artifacts
    pub fn clean(&self, raw: &str) -> String {
        let main = extract_main_text(raw, &self.config.start_marker, &self.config.end_marker);
        clean_text_content(main)
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }
}

impl Default for ContentCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the text between the first `start_marker` and the first `end_marker`, trimmed.
///
/// A missing marker leaves that side of the text untouched.
pub fn extract_main_text<'a>(text: &'a str, start_marker: &str, end_marker: &str) -> &'a str {
    let mut text = text;

    if let Some((_, after)) = text.split_once(start_marker) {
        text = after;
    }

    if let Some((before, _)) = text.split_once(end_marker) {
        text = before;
    }

    text.trim()
}

/// Strips images, unwraps links, drops "Read more" and collapses blank-line runs
pub fn clean_text_content(text: &str) -> String {
    let text = PATTERN_IMAGE.replace_all(text, "");
    let text = PATTERN_LINK.replace_all(&text, "${1}");
    let text = PATTERN_READ_MORE.replace_all(&text, "");
    let text = PATTERN_BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}
