//! # Sentiment Module
//!
//! Sentiment value type, word lexicon, and per-tweet scoring.

mod analyzer;
mod lexicon;
mod score;

pub use analyzer::TweetAnalyzer;
pub use lexicon::SentimentLexicon;
pub use score::Sentiment;
