//! # Sentiment Lexicon
//!
//! Word-to-score lexicon backing the rule-based sentiment scorer.

use crate::error::TrendsError;
use crate::sentiment::Sentiment;
use std::collections::HashMap;

/// Word sentiment lexicon
///
/// Maps lowercase words to scores in [-1, 1]. The lexicon is supplied by
/// the caller (loaded from a data file or built synthetically for tests)
/// and is read-only for the duration of a computation.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    /// Word to sentiment score mapping
    words: HashMap<String, f64>,
}

impl SentimentLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Build a lexicon from word/score pairs, validating every score
    pub fn from_entries<I, S>(entries: I) -> Result<Self, TrendsError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut lexicon = Self::new();
        for (word, score) in entries {
            lexicon.add_word(word, score)?;
        }
        Ok(lexicon)
    }

    /// Add a word to the lexicon
    ///
    /// Fails when the score lies outside [-1, 1].
    pub fn add_word(&mut self, word: impl Into<String>, score: f64) -> Result<(), TrendsError> {
        if !(-1.0..=1.0).contains(&score) {
            return Err(TrendsError::InvalidSentiment(score));
        }
        self.words.insert(word.into(), score);
        Ok(())
    }

    /// Sentiment for a single word
    ///
    /// Unknown when the word is absent from the lexicon. Lookup is exact;
    /// callers pass lowercase tokens.
    pub fn word_sentiment(&self, word: &str) -> Sentiment {
        match self.words.get(word) {
            // Scores were validated on insertion
            Some(&score) => Sentiment::new(score).unwrap_or_else(|_| Sentiment::unknown()),
            None => Sentiment::unknown(),
        }
    }

    /// Number of words in the lexicon
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lexicon() -> SentimentLexicon {
        SentimentLexicon::from_entries(vec![
            ("good", 0.875),
            ("bad", -0.625),
            ("winning", 0.5),
            ("love", 0.625),
        ])
        .unwrap()
    }

    #[test]
    fn test_known_words() {
        let lexicon = sample_lexicon();
        assert_eq!(lexicon.word_sentiment("good").value().unwrap(), 0.875);
        assert_eq!(lexicon.word_sentiment("bad").value().unwrap(), -0.625);
    }

    #[test]
    fn test_unknown_word() {
        let lexicon = sample_lexicon();
        assert!(!lexicon.word_sentiment("berkeley").has_value());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let lexicon = sample_lexicon();
        // Tweet text is lowercase by contract; the lexicon does not fold case
        assert!(!lexicon.word_sentiment("Good").has_value());
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let mut lexicon = SentimentLexicon::new();
        assert!(lexicon.add_word("great", 1.5).is_err());
        assert!(lexicon.is_empty());
    }
}
