// * LLM Formatting
// * Streams the cleaned narrative through a local chat model to fill the destination schema.

pub mod client;
pub mod errors;
pub mod formatter;
pub mod prompt;
pub mod stream;
pub mod types;

// * Re-exports for convenient access
pub use client::OllamaClient;
pub use errors::LlmError;
pub use formatter::{parse_response, strip_code_fences, LlmFormatter};
pub use prompt::{build_messages, DETAIL_KEYS};
pub use stream::{collect_response, echo_fragment, ChatStream, ResponseAccumulator};
pub use types::{ChatChunk, ChatMessage, ChatOptions, ChatRequest};
