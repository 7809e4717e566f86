//! # Error Types
//!
//! Errors surfaced by the sentiment trends pipeline.

use thiserror::Error;

/// Errors that can occur in the trends pipeline
#[derive(Error, Debug)]
pub enum TrendsError {
    /// A sentiment value outside the closed interval [-1, 1]
    #[error("invalid sentiment value {0}: must be within [-1, 1]")]
    InvalidSentiment(f64),

    /// Reading the value of a sentiment that has none
    #[error("sentiment unavailable: no value present")]
    SentimentUnavailable,

    /// Nearest-region lookup against an empty candidate set
    #[error("no candidate regions to match against")]
    NoCandidateRegions,

    /// A region whose polygons cover zero total area
    #[error("cannot compute center for region: zero total area")]
    ZeroAreaRegion,

    /// Failure reading an input data file
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON in an input data file
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
