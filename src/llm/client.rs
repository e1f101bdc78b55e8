// * Chat Endpoint Client
// * Streams chat completions from an Ollama-compatible `/api/chat` endpoint.

use crate::config::LlmConfig;
use crate::llm::errors::LlmError;
use crate::llm::stream::ChatStream;
use crate::llm::types::{ChatMessage, ChatOptions, ChatRequest};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Streaming chat client bound to one endpoint and model
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    config: LlmConfig,
}

impl OllamaClient {
    /// Client without a request timeout; generation may take minutes
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        Ok(Self {
            http: Client::builder().build()?,
            config,
        })
    }

    /// Client that abandons requests after `timeout`
    pub fn with_timeout(config: LlmConfig, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            http: Client::builder().timeout(timeout).build()?,
            config,
        })
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Streaming request carrying the configured sampling options
    pub fn request(&self, messages: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages,
            stream: true,
            options: Some(ChatOptions {
                temperature: self.config.temperature,
                num_ctx: self.config.num_ctx,
            }),
        }
    }

    /// Sends the request and returns the decoded chunk stream
    pub async fn chat_stream(&self, request: &ChatRequest) -> Result<ChatStream, LlmError> {
        debug!(endpoint = %self.config.endpoint, model = %request.model, "Sending chat request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    LlmError::Connection {
                        endpoint: self.config.endpoint.clone(),
                        source: e,
                    }
                } else {
                    LlmError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "LLM endpoint returned an error");
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ChatStream::new(response.bytes_stream()))
    }
}
