// * Attraction List Extraction
// * Reads sub-headings under the attractions section until a generic section title appears.

use crate::config::constants::{
    ATTRACTIONS_MARKER, ATTRACTION_HEADING, MIN_ATTRACTION_CHARS, STOP_TITLES,
};
use crate::persistence::dedup_ordered;
use regex::Regex;
use std::sync::LazyLock;

static PATTERN_LINK_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\(").expect("Invalid link label regex"));

static PATTERN_RAW_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(https?://.*?\)").expect("Invalid raw URL regex"));

/// Configuration for attraction extraction
#[derive(Debug, Clone)]
pub struct AttractionConfig {
    /// Heading that opens the attractions section
    pub section_marker: String,
    /// Prefix identifying an attraction sub-heading
    pub heading_prefix: String,
    /// Lower-case titles that end the list
    pub stop_titles: Vec<String>,
    /// Names shorter than this (in characters) are dropped
    pub min_chars: usize,
}

impl Default for AttractionConfig {
    fn default() -> Self {
        Self {
            section_marker: ATTRACTIONS_MARKER.to_string(),
            heading_prefix: ATTRACTION_HEADING.to_string(),
            stop_titles: STOP_TITLES.iter().map(|s| s.to_string()).collect(),
            min_chars: MIN_ATTRACTION_CHARS,
        }
    }
}

/// Extracts attraction names from a scraped page
pub struct AttractionExtractor {
    config: AttractionConfig,
}

impl AttractionExtractor {
    pub fn new() -> Self {
        Self::with_config(AttractionConfig::default())
    }

    pub fn with_config(config: AttractionConfig) -> Self {
        Self { config }
    }

    /// Unique attraction names in page order; empty when the section is absent
    pub fn extract(&self, text: &str) -> Vec<String> {
        let Some((_, section)) = text.split_once(self.config.section_marker.as_str()) else {
            return Vec::new();
        };

        let mut names = Vec::new();

        for line in section.split('\n') {
            let line = line.trim();
            if !line.starts_with(self.config.heading_prefix.as_str()) {
                continue;
            }

            let title = line.replace("##", "");
            let title = title.trim();
            let name = candidate_name(line, title);

            // ! Hard stop: the list is over, later headings belong to other sections
            if self.is_stop_title(title) || self.is_stop_title(&name) {
                break;
            }

            if name.chars().count() < self.config.min_chars {
                continue;
            }

            names.push(name);
        }

        dedup_ordered(names)
    }

    fn is_stop_title(&self, text: &str) -> bool {
        let lower = text.trim().to_lowercase();
        self.config.stop_titles.iter().any(|t| *t == lower)
    }
}

impl Default for AttractionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Link label when the heading wraps a link, otherwise the heading text
fn candidate_name(line: &str, title: &str) -> String {
    let raw = match PATTERN_LINK_LABEL.captures(line).and_then(|c| c.get(1)) {
        Some(label) => label.as_str().trim(),
        None => title,
    };

    let without_urls = PATTERN_RAW_URL.replace_all(raw, "");
    without_urls
        .trim_matches(|c| c == '[' || c == ']' || c == ' ')
        .to_string()
}

/// Convenience function using the default section layout
pub fn extract_attractions(text: &str) -> Vec<String> {
    AttractionExtractor::new().extract(text)
}
