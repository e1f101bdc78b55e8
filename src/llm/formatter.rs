// * LLM Formatter
// * Fills the schema template for the destination from the cleaned narrative.
// * Single request, no retry: a response that does not parse as JSON fails the stage.

use crate::config::constants::{CHARS_PER_TOKEN, PROMPT_OVERHEAD_CHARS, RAW_PREVIEW_CHARS};
use crate::config::{DestinationConfig, LlmConfig};
use crate::llm::client::OllamaClient;
use crate::llm::errors::LlmError;
use crate::llm::prompt::build_messages;
use crate::llm::stream::{collect_response, echo_fragment};
use crate::persistence::{read_json, write_json, CleanedDocument};
use serde_json::Value;
use std::path::Path;
use tracing::{error, info, warn};

/// Formats cleaned documents through a chat endpoint
pub struct LlmFormatter {
    client: OllamaClient,
    destination: DestinationConfig,
}

impl LlmFormatter {
    /// Creates a formatter from an already resolved endpoint configuration
    pub fn new(config: LlmConfig, destination: DestinationConfig) -> Result<Self, LlmError> {
        Ok(Self {
            client: OllamaClient::new(config)?,
            destination,
        })
    }

    pub fn with_client(client: OllamaClient, destination: DestinationConfig) -> Self {
        Self {
            client,
            destination,
        }
    }

    /// Asks the model to fill `template` for the document's destination
    pub async fn format(&self, document: &CleanedDocument, template: &Value) -> Result<Value, LlmError> {
        if document.full_description.trim().is_empty() {
            warn!("Full description is empty, falling back to summary");
        }
        let context = document.context_text().ok_or(LlmError::EmptyContext)?;
        info!(chars = context.chars().count(), "Context length");

        // * Pretty-printed template reads more like an example to the model
        let template_text = serde_json::to_string_pretty(template).unwrap_or_else(|_| template.to_string());

        let total_chars =
            template_text.chars().count() + context.chars().count() + PROMPT_OVERHEAD_CHARS;
        info!(
            chars = total_chars,
            approx_tokens = total_chars / CHARS_PER_TOKEN,
            "Total LLM input"
        );

        let request = self
            .client
            .request(build_messages(&self.destination, &template_text, context));

        info!(endpoint = %self.client.endpoint(), "Sending request, response will stream");
        let stream = self.client.chat_stream(&request).await?;

        let echo = self.client.config().echo_stream;
        let response = collect_response(stream, |fragment| {
            if echo {
                echo_fragment(fragment);
            }
        })
        .await?;
        if echo {
            println!();
        }

        if response.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        parse_response(&response)
    }

    /// Reads the cleaned document and template, formats, and writes the final document
    pub async fn run(&self, input: &Path, template: &Path, output: &Path) -> Result<Value, LlmError> {
        info!(input = %input.display(), "Reading input data");
        let document: CleanedDocument = read_json(input).map_err(LlmError::Input)?;
        let template: Value = read_json(template).map_err(LlmError::Template)?;

        let formatted = self.format(&document, &template).await?;

        write_json(output, &formatted).map_err(LlmError::Output)?;
        info!(output = %output.display(), "LLM formatted data saved");

        Ok(formatted)
    }
}

/// Removes a leading ```json / ``` fence and a trailing ``` fence
pub fn strip_code_fences(raw: &str) -> &str {
    let text = raw.trim();
    let text = text.strip_prefix("```json").unwrap_or(text).trim();
    let text = text.strip_prefix("```").unwrap_or(text).trim();
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

/// Parses the model output after fence removal
pub fn parse_response(raw: &str) -> Result<Value, LlmError> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(cleaned).map_err(|source| {
        let preview: String = cleaned.chars().take(RAW_PREVIEW_CHARS).collect();
        error!(error = %source, preview = %preview, "Failed to parse LLM output as JSON");
        LlmError::MalformedOutput { source, preview }
    })
}
