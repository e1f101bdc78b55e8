//! Line-delimited JSON streaming for chat responses.
//!
//! Converts a raw `reqwest` byte stream into `ChatChunk` values. Each line is a JSON
//! object shaped `{"message": {"role", "content"}, "done": bool}`. Lines that fail to
//! decode are skipped; a broken transport ends the stream with an error.

use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use serde::Deserialize;
use std::io::Write;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::{debug, info};

use crate::llm::errors::LlmError;
use crate::llm::types::ChatChunk;

#[derive(Debug, Deserialize)]
struct RawChunk {
    #[serde(default)]
    message: Option<RawMessage>,
    #[serde(default)]
    done: bool,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(default)]
    content: String,
}

type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// Stream adapter that converts raw response bytes into `ChatChunk` values.
pub struct ChatStream {
    inner: ByteStream,
    buffer: Vec<u8>,
    exhausted: bool,
}

impl ChatStream {
    pub fn new(
        byte_stream: impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
    ) -> Self {
        Self {
            inner: Box::pin(byte_stream),
            buffer: Vec::new(),
            exhausted: false,
        }
    }
}

impl Stream for ChatStream {
    type Item = Result<ChatChunk, LlmError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            // Drain complete lines before asking for more bytes
            while let Some(line) = take_line(&mut this.buffer) {
                if let Some(chunk) = decode_line(&line) {
                    return Poll::Ready(Some(Ok(chunk)));
                }
            }

            if this.exhausted {
                return Poll::Ready(None);
            }

            match this.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => this.buffer.extend_from_slice(&bytes),
                Poll::Ready(Some(Err(e))) => {
                    this.exhausted = true;
                    return Poll::Ready(Some(Err(LlmError::Stream(e.to_string()))));
                }
                Poll::Ready(None) => {
                    // Final line may lack a trailing newline
                    this.exhausted = true;
                    let rest = std::mem::take(&mut this.buffer);
                    return Poll::Ready(decode_line(&rest).map(Ok));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Removes and returns the next newline-terminated line, if one is buffered.
fn take_line(buffer: &mut Vec<u8>) -> Option<Vec<u8>> {
    let newline_pos = buffer.iter().position(|b| *b == b'\n')?;
    Some(buffer.drain(..=newline_pos).collect())
}

/// Decodes one line; blank or malformed lines yield `None`.
fn decode_line(line: &[u8]) -> Option<ChatChunk> {
    let text = std::str::from_utf8(line).ok()?.trim();
    if text.is_empty() {
        return None;
    }

    match serde_json::from_str::<RawChunk>(text) {
        Ok(raw) => Some(ChatChunk {
            content: raw.message.map(|m| m.content).unwrap_or_default(),
            done: raw.done,
        }),
        Err(e) => {
            let preview: String = text.chars().take(200).collect();
            debug!(error = %e, line = %preview, "Skipping malformed stream line");
            None
        }
    }
}

/// Folds chunks into the full response text.
#[derive(Debug, Default)]
pub struct ResponseAccumulator {
    text: String,
    done: bool,
}

impl ResponseAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk; returns true once the terminal chunk has been seen.
    pub fn push(&mut self, chunk: &ChatChunk) -> bool {
        self.text.push_str(&chunk.content);
        self.done |= chunk.done;
        self.done
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn finish(self) -> String {
        self.text
    }
}

/// Prints a streamed fragment to stdout as soon as it arrives.
pub fn echo_fragment(fragment: &str) {
    write_fragment(&mut std::io::stdout().lock(), fragment);
}

/// Writes and flushes one fragment; a failed write only costs the echo.
pub fn write_fragment<W: Write>(out: &mut W, fragment: &str) {
    if let Err(e) = out.write_all(fragment.as_bytes()).and_then(|_| out.flush()) {
        debug!(error = %e, "Failed to echo stream fragment");
    }
}

/// Consumes a chunk stream until the terminal chunk or end of stream.
///
/// `on_fragment` sees each piece of content as it arrives.
pub async fn collect_response<S, F>(mut stream: S, mut on_fragment: F) -> Result<String, LlmError>
where
    S: Stream<Item = Result<ChatChunk, LlmError>> + Unpin,
    F: FnMut(&str),
{
    let mut acc = ResponseAccumulator::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        on_fragment(&chunk.content);
        if acc.push(&chunk) {
            info!("Generation complete");
            break;
        }
    }

    if !acc.is_done() {
        debug!("Stream ended without a terminal chunk");
    }

    Ok(acc.finish())
}
