use crate::persistence::StoreError;
use thiserror::Error;

// * Errors raised while formatting a cleaned document through the chat endpoint.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Could not connect to LLM endpoint {endpoint}: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from LLM endpoint: {body}")]
    Status { status: u16, body: String },

    #[error("Response stream interrupted: {0}")]
    Stream(String),

    #[error("Failed to read cleaned document: {0}")]
    Input(#[source] StoreError),

    #[error("Failed to read schema template: {0}")]
    Template(#[source] StoreError),

    #[error("Failed to write formatted document: {0}")]
    Output(#[source] StoreError),

    #[error("Cleaned document has neither a description nor a summary")]
    EmptyContext,

    #[error("LLM returned an empty response")]
    EmptyResponse,

    #[error("LLM output is not valid JSON ({source}); raw output starts with: {preview}")]
    MalformedOutput {
        #[source]
        source: serde_json::Error,
        preview: String,
    },
}
