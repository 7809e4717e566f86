//! # Sentiment Value
//!
//! Optional bounded sentiment score with an explicit "unknown" state.

use crate::error::TrendsError;
use serde::{Deserialize, Serialize};

/// A sentiment score that may not exist
///
/// A present value always lies within [-1, 1]. Absence ("unknown") is a
/// distinct state from a neutral score of 0, and the aggregation rules
/// depend on that distinction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment(Option<f64>);

impl Sentiment {
    /// Create a sentiment with a present value
    ///
    /// Fails when the value lies outside [-1, 1]; out-of-range values are
    /// never clamped.
    pub fn new(value: f64) -> Result<Self, TrendsError> {
        if (-1.0..=1.0).contains(&value) {
            Ok(Self(Some(value)))
        } else {
            Err(TrendsError::InvalidSentiment(value))
        }
    }

    /// The unknown sentiment
    pub const fn unknown() -> Self {
        Self(None)
    }

    /// Whether a value is present
    pub fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// The present value, or an error when unknown
    pub fn value(&self) -> Result<f64, TrendsError> {
        self.0.ok_or(TrendsError::SentimentUnavailable)
    }

    /// The value as a plain option
    pub fn as_option(&self) -> Option<f64> {
        self.0
    }
}
