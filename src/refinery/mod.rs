// * The Refinery (Cleaning Pipeline)
// * Turns harvested markdown pages into a single cleaned destination document:
// * narrative text, an attraction list and an extractive summary.

pub mod attractions;
pub mod content_cleaner;
pub mod markdown;
pub mod summarizer;

// * Re-exports for convenient access
pub use attractions::{extract_attractions, AttractionConfig, AttractionExtractor};
pub use content_cleaner::{clean_text_content, extract_main_text, CleanerConfig, ContentCleaner};
pub use markdown::{html_to_markdown, MarkdownRenderer};
pub use summarizer::{generate_summary, split_sentences, Summarizer, SummarizerConfig};

use crate::config::DestinationConfig;
use crate::persistence::{dedup_ordered, read_json, write_json, CleanedDocument, ScrapedRecord, StoreError};
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum RefineryError {
    #[error("Failed to load scraped records: {0}")]
    Input(#[source] StoreError),

    #[error("Failed to write cleaned document: {0}")]
    Output(#[source] StoreError),
}

/// Configuration for the cleaning pipeline
#[derive(Debug, Clone, Default)]
pub struct RefineryConfig {
    pub destination: DestinationConfig,
    pub attractions: AttractionConfig,
    pub summarizer: SummarizerConfig,
}

impl RefineryConfig {
    pub fn for_destination(destination: DestinationConfig) -> Self {
        Self {
            destination,
            ..Default::default()
        }
    }
}

/// The cleaning pipeline over a batch of scraped records
///
/// # Example
/// ```ignore
/// use travel_refinery::refinery::Refinery;
///
/// let refinery = Refinery::new();
/// let doc = refinery.run(Path::new("bikaner_raw.json"), Path::new("bikaner_clean.json"))?;
/// println!("Attractions: {:?}", doc.attractions);
/// ```
pub struct Refinery {
    config: RefineryConfig,
    cleaner: ContentCleaner,
    attractions: AttractionExtractor,
    summarizer: Summarizer,
}

impl Refinery {
    /// Creates a new refinery for the default destination
    pub fn new() -> Self {
        Self::with_config(RefineryConfig::default())
    }

    /// Creates a new refinery with custom configuration
    pub fn with_config(config: RefineryConfig) -> Self {
        Self {
            cleaner: ContentCleaner::with_config(CleanerConfig {
                start_marker: config.destination.start_marker.clone(),
                end_marker: config.destination.end_marker.clone(),
            }),
            attractions: AttractionExtractor::with_config(config.attractions.clone()),
            summarizer: Summarizer::with_config(config.summarizer.clone()),
            config,
        }
    }

    /// Merges records into one cleaned document
    ///
    /// # Pipeline Steps:
    /// 1. Extract and clean each record's narrative (empty results dropped)
    /// 2. Extract attractions from each record's raw content
    /// 3. Collect every record's source URL
    /// 4. Join narratives, dedupe attractions, summarize
    pub fn refine(&self, records: &[ScrapedRecord]) -> CleanedDocument {
        let mut descriptions = Vec::new();
        let mut attractions = Vec::new();
        let mut sources = Vec::with_capacity(records.len());

        for record in records {
            sources.push(record.source_url.clone());

            let cleaned = self.cleaner.clean(&record.raw_content);
            if !cleaned.is_empty() {
                descriptions.push(cleaned);
            }

            // * Attractions come from the raw page, the cleaned text has lost its headings
            attractions.extend(self.attractions.extract(&record.raw_content));
        }

        let full_description = descriptions.join("\n\n");
        let summary = self.summarizer.summarize(&full_description);

        CleanedDocument {
            destination: self.config.destination.name.clone(),
            state: self.config.destination.state.clone(),
            summary,
            full_description,
            attractions: dedup_ordered(attractions),
            sources,
        }
    }

    /// Reads the raw records file, refines it and writes the cleaned document
    pub fn run(&self, input: &Path, output: &Path) -> Result<CleanedDocument, RefineryError> {
        info!(input = %input.display(), output = %output.display(), "Starting cleaning stage");

        let records: Vec<ScrapedRecord> = read_json(input).map_err(RefineryError::Input)?;
        let document = self.refine(&records);

        if document.full_description.is_empty() {
            warn!(records = records.len(), "No description content extracted");
        }

        write_json(output, &document).map_err(RefineryError::Output)?;

        info!(
            records = records.len(),
            description_chars = document.full_description.chars().count(),
            attractions = document.attractions.len(),
            "Cleaned data saved"
        );

        Ok(document)
    }

    /// Returns the current configuration
    pub fn config(&self) -> &RefineryConfig {
        &self.config
    }
}

impl Default for Refinery {
    fn default() -> Self {
        Self::new()
    }
}
