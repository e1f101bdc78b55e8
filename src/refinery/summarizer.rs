// * Extractive Keyword Summarizer
// * Picks the first few long sentences that mention a travel keyword.

use crate::config::constants::{
    SUMMARY_KEYWORDS, SUMMARY_MAX_SENTENCES, SUMMARY_MIN_SENTENCES, SUMMARY_MIN_SENTENCE_CHARS,
};
use regex::Regex;
use std::sync::LazyLock;

// * Whitespace run following sentence-ending punctuation
static PATTERN_SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?](\s+)").expect("Invalid sentence break regex"));

/// Configuration for the summarizer
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Case-insensitive keywords that qualify a sentence
    pub keywords: Vec<String>,
    /// Sentences shorter than this (in characters) are never picked
    pub min_sentence_chars: usize,
    /// Selection stops once this many sentences are picked
    pub max_sentences: usize,
    /// Below this many picks the leading sentences are used instead
    pub min_sentences: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            keywords: SUMMARY_KEYWORDS.iter().map(|k| k.to_lowercase()).collect(),
            min_sentence_chars: SUMMARY_MIN_SENTENCE_CHARS,
            max_sentences: SUMMARY_MAX_SENTENCES,
            min_sentences: SUMMARY_MIN_SENTENCES,
        }
    }
}

/// Deterministic extractive summarizer
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    pub fn with_config(mut config: SummarizerConfig) -> Self {
        for keyword in &mut config.keywords {
            *keyword = keyword.to_lowercase();
        }
        Self { config }
    }

    /// Builds the summary for `text`
    ///
    /// Falls back to the first `min_sentences` raw sentences, unfiltered, when the
    /// keyword pass finds too few.
    pub fn summarize(&self, text: &str) -> String {
        let sentences = split_sentences(text);
        let mut picked: Vec<&str> = Vec::new();

        for sentence in &sentences {
            let sentence = sentence.trim();
            if sentence.chars().count() < self.config.min_sentence_chars {
                continue;
            }

            if self.has_keyword(sentence) {
                picked.push(sentence);
            }

            if picked.len() == self.config.max_sentences {
                break;
            }
        }

        if picked.len() < self.config.min_sentences {
            picked = sentences
                .iter()
                .take(self.config.min_sentences)
                .copied()
                .collect();
        }

        picked.join(" ")
    }

    fn has_keyword(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        self.config.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits at whitespace that follows `.`, `!` or `?`; the punctuation stays with its sentence
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for caps in PATTERN_SENTENCE_BREAK.captures_iter(text) {
        if let Some(gap) = caps.get(1) {
            sentences.push(&text[start..gap.start()]);
            start = gap.end();
        }
    }

    sentences.push(&text[start..]);
    sentences
}

/// Convenience function with the default keyword set
pub fn generate_summary(text: &str) -> String {
    Summarizer::new().summarize(text)
}
