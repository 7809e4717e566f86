//! # Data Module
//!
//! Tweet and position value types, tokenization, and input loading.

mod load;
mod tokenizer;
mod tweet;

pub use load::{load_lexicon, load_regions, load_tweets};
pub use tokenizer::Tokenizer;
pub use tweet::{Position, Tweet};
