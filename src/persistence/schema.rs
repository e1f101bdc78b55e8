// * Stage Artifacts
// * Data structures exchanged between the harvest, cleaning and formatting stages

use serde::{Deserialize, Serialize};

/// One harvested page, as written by the scrape stage
///
/// Every field defaults when absent so partially populated raw files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedRecord {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_url: Option<String>,
    /// Page body rendered as markdown
    #[serde(default)]
    pub raw_content: String,
}

impl ScrapedRecord {
    pub fn new(destination: &str, source: &str, source_url: &str, raw_content: String) -> Self {
        Self {
            destination: destination.to_string(),
            source: source.to_string(),
            source_url: Some(source_url.to_string()),
            raw_content,
        }
    }
}

/// Merged output of the cleaning stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedDocument {
    pub destination: String,
    pub state: String,
    pub summary: String,
    pub full_description: String,
    /// Unique, in first-seen order
    pub attractions: Vec<String>,
    /// One entry per input record, null when the record had no URL
    pub sources: Vec<Option<String>>,
}

impl CleanedDocument {
    /// Text handed to the LLM: the full description, or the summary when that is empty
    pub fn context_text(&self) -> Option<&str> {
        [self.full_description.as_str(), self.summary.as_str()]
            .into_iter()
            .find(|text| !text.trim().is_empty())
    }
}
