// * Runtime settings for the pipeline stages
// * Built once by the caller; the environment override is applied before construction

use crate::config::constants::{
    CLEAN_FILE, DEFAULT_COUNTRY, DEFAULT_DESTINATION, DEFAULT_MODEL, DEFAULT_NUM_CTX,
    DEFAULT_OLLAMA_URL, DEFAULT_STATE, DEFAULT_TEMPERATURE, FINAL_FILE, NARRATIVE_END_MARKER,
    NARRATIVE_START_MARKER, OLLAMA_URL_ENV, RAW_FILE, TEMPLATE_FILE,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single page to harvest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSite {
    pub source: String,
    pub url: String,
}

impl SourceSite {
    pub fn new(source: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            url: url.into(),
        }
    }
}

/// The destination being processed and the markers that frame its narrative
#[derive(Debug, Clone)]
pub struct DestinationConfig {
    pub name: String,
    pub state: String,
    pub country: String,
    /// Everything up to and including this marker is dropped
    pub start_marker: String,
    /// This marker and everything after it is dropped
    pub end_marker: String,
}

impl Default for DestinationConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DESTINATION.to_string(),
            state: DEFAULT_STATE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            start_marker: NARRATIVE_START_MARKER.to_string(),
            end_marker: NARRATIVE_END_MARKER.to_string(),
        }
    }
}

/// Settings for the chat endpoint
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub num_ctx: u32,
    /// Print streamed fragments to stdout as they arrive
    pub echo_stream: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            num_ctx: DEFAULT_NUM_CTX,
            echo_stream: true,
        }
    }
}

impl LlmConfig {
    /// Default settings with `OLLAMA_URL` applied when set
    pub fn from_env() -> Self {
        Self::default().with_endpoint_override(std::env::var(OLLAMA_URL_ENV).ok())
    }

    /// Replaces the endpoint when an override is present and non-blank
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(url) = endpoint.filter(|u| !u.trim().is_empty()) {
            self.endpoint = url.trim().to_string();
        }
        self
    }
}

/// Files exchanged between stages
#[derive(Debug, Clone)]
pub struct StagePaths {
    pub raw: PathBuf,
    pub clean: PathBuf,
    pub final_output: PathBuf,
    pub template: PathBuf,
}

impl Default for StagePaths {
    fn default() -> Self {
        Self {
            raw: PathBuf::from(RAW_FILE),
            clean: PathBuf::from(CLEAN_FILE),
            final_output: PathBuf::from(FINAL_FILE),
            template: PathBuf::from(TEMPLATE_FILE),
        }
    }
}

/// Top-level configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub destination: DestinationConfig,
    pub llm: LlmConfig,
    pub paths: StagePaths,
    pub sources: Vec<SourceSite>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            destination: DestinationConfig::default(),
            llm: LlmConfig::default(),
            paths: StagePaths::default(),
            sources: default_sources(),
        }
    }
}

impl PipelineConfig {
    /// Default configuration with environment overrides applied
    pub fn from_env() -> Self {
        Self {
            llm: LlmConfig::from_env(),
            ..Self::default()
        }
    }
}

/// Travel pages harvested for the default destination
pub fn default_sources() -> Vec<SourceSite> {
    vec![
        SourceSite::new(
            "Incredible India",
            "https://www.incredibleindia.gov.in/en/rajasthan/bikaner",
        ),
        SourceSite::new(
            "Rajasthan Tourism",
            "https://www.tourism.rajasthan.gov.in/bikaner.html",
        ),
        SourceSite::new("Wikivoyage", "https://en.wikivoyage.org/wiki/Bikaner"),
    ]
}
