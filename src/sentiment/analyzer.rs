//! # Tweet Analyzer
//!
//! Per-message sentiment scoring against an injected lexicon.

use crate::data::{Tokenizer, Tweet};
use crate::sentiment::{Sentiment, SentimentLexicon};

/// Analyzer combining the tokenizer with a sentiment lexicon
pub struct TweetAnalyzer {
    /// Word tokenizer
    tokenizer: Tokenizer,
    /// Word sentiment lexicon
    lexicon: SentimentLexicon,
}

impl TweetAnalyzer {
    /// Create an analyzer over the given lexicon
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            lexicon,
        }
    }

    /// The underlying lexicon
    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    /// Word tokens of a tweet's text
    pub fn tweet_words(&self, tweet: &Tweet) -> Vec<String> {
        self.tokenizer.extract_words(&tweet.text)
    }

    /// Sentiment of a single tweet
    ///
    /// Averages the scores of the tokens that carry a sentiment, dividing
    /// by the count of those tokens only. A tweet with no sentiment-bearing
    /// tokens scores unknown, never 0.
    pub fn message_sentiment(&self, tweet: &Tweet) -> Sentiment {
        let mut total = 0.0;
        let mut count = 0usize;
        for word in self.tokenizer.extract_words(&tweet.text) {
            if let Some(score) = self.lexicon.word_sentiment(&word).as_option() {
                total += score;
                count += 1;
            }
        }
        if count == 0 {
            Sentiment::unknown()
        } else {
            // A mean of values in [-1, 1] stays in [-1, 1]
            Sentiment::new(total / count as f64).unwrap_or_else(|_| Sentiment::unknown())
        }
    }

    /// Sentiment for each tweet of a batch, in input order
    pub fn analyze_batch(&self, tweets: &[Tweet]) -> Vec<Sentiment> {
        tweets.iter().map(|t| self.message_sentiment(t)).collect()
    }
}
