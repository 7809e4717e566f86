//! # Tokenizer
//!
//! Splits raw message text into word tokens, discarding punctuation.

use regex::Regex;

/// Tokenizer for short message text
///
/// A token is a maximal run of ASCII alphabetic characters; every other
/// character acts as a separator. The tokenizer performs no case folding,
/// so callers that feed the sentiment lexicon must lowercase first (tweet
/// text is lowercase by contract).
pub struct Tokenizer {
    /// Regex matching a maximal alphabetic run
    word_regex: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self {
            word_regex: Regex::new(r"[A-Za-z]+").unwrap(),
        }
    }

    /// Extract word tokens from text, in original order
    ///
    /// Runs of separators collapse; the output never contains an empty
    /// token. Text with no alphabetic characters yields an empty vector.
    pub fn extract_words(&self, text: &str) -> Vec<String> {
        self.word_regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
