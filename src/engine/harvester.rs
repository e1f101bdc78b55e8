// * Harvest Stage
// * Fetches each configured source page in turn and renders it to markdown.
// * A failed page still yields a record so its URL is kept in the document sources.

use crate::config::constants::CRAWL_DELAY_MS;
use crate::config::SourceSite;
use crate::network::client::FastClient;
use crate::network::errors::NetworkError;
use crate::persistence::{write_json, ScrapedRecord, StoreError};
use crate::refinery::MarkdownRenderer;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("HTTP client setup failed: {0}")]
    Client(#[from] NetworkError),

    #[error("Failed to write raw records: {0}")]
    Output(#[from] StoreError),
}

/// Sequential page harvester for one destination
pub struct Harvester {
    client: FastClient,
    destination: String,
    delay: Duration,
}

impl Harvester {
    /// Creates a harvester with the default politeness delay
    pub fn new(destination: &str) -> Result<Self, HarvestError> {
        Ok(Self::with_client(FastClient::new()?, destination))
    }

    /// Creates a harvester around an existing client
    pub fn with_client(client: FastClient, destination: &str) -> Self {
        Self {
            client,
            destination: destination.to_string(),
            delay: Duration::from_millis(CRAWL_DELAY_MS),
        }
    }

    /// Overrides the pause between fetches
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fetches every source in order, one record per source
    pub async fn harvest(&self, sources: &[SourceSite]) -> Vec<ScrapedRecord> {
        let mut records = Vec::with_capacity(sources.len());

        for (index, site) in sources.iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            info!(source = %site.source, url = %site.url, "Scraping");

            let raw_content = match self.client.fetch(&site.url).await {
                Ok(html) => MarkdownRenderer::new(&site.url).render(&html),
                Err(e) => {
                    warn!(source = %site.source, error = %e, "Fetch failed, keeping empty record");
                    String::new()
                }
            };

            info!(
                source = %site.source,
                chars = raw_content.chars().count(),
                "Fetched page content"
            );

            records.push(ScrapedRecord::new(
                &self.destination,
                &site.source,
                &site.url,
                raw_content,
            ));
        }

        records
    }

    /// Harvests all sources and writes the raw records file
    pub async fn run(
        &self,
        sources: &[SourceSite],
        output: &Path,
    ) -> Result<Vec<ScrapedRecord>, HarvestError> {
        let records = self.harvest(sources).await;
        write_json(output, &records)?;
        info!(records = records.len(), output = %output.display(), "Scraping complete");
        Ok(records)
    }
}
