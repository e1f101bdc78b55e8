// * Connection Probe
// * Sends a trivial streaming request to confirm the LLM endpoint answers.

use crate::config::constants::PROBE_TIMEOUT_SECS;
use crate::config::LlmConfig;
use crate::llm::{collect_response, echo_fragment, ChatMessage, ChatRequest, LlmError, OllamaClient};
use std::time::Duration;
use tracing::{error, info};

pub const PROBE_PROMPT: &str = "Just say 'Hello, connection is working!' and nothing else.";

/// Streams a short greeting from the endpoint and returns it
pub async fn probe(config: &LlmConfig) -> Result<String, LlmError> {
    probe_with_timeout(config, Duration::from_secs(PROBE_TIMEOUT_SECS)).await
}

pub async fn probe_with_timeout(config: &LlmConfig, timeout: Duration) -> Result<String, LlmError> {
    info!(endpoint = %config.endpoint, model = %config.model, timeout_secs = timeout.as_secs(), "Testing connection");

    let client = OllamaClient::with_timeout(config.clone(), timeout)?;
    let request = ChatRequest {
        model: config.model.clone(),
        messages: vec![ChatMessage::user(PROBE_PROMPT)],
        stream: true,
        options: None,
    };

    let stream = match client.chat_stream(&request).await {
        Ok(stream) => stream,
        Err(e) => {
            error!(error = %e, "Probe failed, is the LLM server running?");
            return Err(e);
        }
    };

    info!("Connection established, streaming response");
    let echo = config.echo_stream;
    let reply = collect_response(stream, |fragment| {
        if echo {
            echo_fragment(fragment);
        }
    })
    .await?;
    if echo {
        println!();
    }

    info!(chars = reply.chars().count(), "Probe passed");
    Ok(reply)
}
