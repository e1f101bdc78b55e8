// * Pipeline Driver
// * scrape -> clean -> format, each stage reading the previous stage's file.
// * The first failing stage stops the run; nothing is retried.

use crate::config::PipelineConfig;
use crate::engine::{HarvestError, Harvester};
use crate::llm::{LlmError, LlmFormatter};
use crate::persistence::CleanedDocument;
use crate::refinery::{Refinery, RefineryConfig, RefineryError};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Scraping failed: {0}")]
    Harvest(#[from] HarvestError),

    #[error("Cleaning failed: {0}")]
    Refinery(#[from] RefineryError),

    #[error("LLM processing failed: {0}")]
    Llm(#[from] LlmError),
}

/// Step 1: harvest every source page into the raw records file
pub async fn run_scrape(config: &PipelineConfig) -> Result<(), PipelineError> {
    info!(sources = config.sources.len(), "Step 1: Starting scraping");
    let harvester = Harvester::new(&config.destination.name)?;
    harvester.run(&config.sources, &config.paths.raw).await?;
    Ok(())
}

/// Step 2: clean the raw records into the cleaned document
pub fn run_clean(config: &PipelineConfig) -> Result<CleanedDocument, PipelineError> {
    info!("Step 2: Cleaning data");
    let refinery = Refinery::with_config(RefineryConfig::for_destination(config.destination.clone()));
    Ok(refinery.run(&config.paths.raw, &config.paths.clean)?)
}

/// Step 3: fill the schema template through the LLM
pub async fn run_format(config: &PipelineConfig) -> Result<Value, PipelineError> {
    info!("Step 3: LLM formatting");
    let formatter = LlmFormatter::new(config.llm.clone(), config.destination.clone())?;
    let paths = &config.paths;
    Ok(formatter
        .run(&paths.clean, &paths.template, &paths.final_output)
        .await?)
}

/// Runs all three stages, halting at the first failure
pub async fn run_all(config: &PipelineConfig) -> Result<Value, PipelineError> {
    run_scrape(config).await.inspect_err(|e| error!(error = %e, "Aborting"))?;
    run_clean(config).inspect_err(|e| error!(error = %e, "Cleaning failed, aborting"))?;
    let formatted = run_format(config)
        .await
        .inspect_err(|e| error!(error = %e, "LLM processing failed"))?;

    info!(output = %config.paths.final_output.display(), "Pipeline complete");
    Ok(formatted)
}

/// Runs cleaning and formatting over an existing raw records file
pub async fn run_from_raw(config: &PipelineConfig) -> Result<Value, PipelineError> {
    run_clean(config).inspect_err(|e| error!(error = %e, "Cleaning failed, aborting"))?;
    let formatted = run_format(config)
        .await
        .inspect_err(|e| error!(error = %e, "LLM processing failed"))?;
    Ok(formatted)
}
