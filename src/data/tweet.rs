//! # Tweet Data Module
//!
//! Tweet and position value types for the sentiment trends pipeline.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair
///
/// Pure value type with no identity; latitude and longitude are kept in
/// degrees throughout the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl Position {
    /// Create a new position
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// A geotagged short text message
///
/// Immutable once created; collections in the pipeline hold shared
/// references and never mutate the original.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    /// Message text, already lowercase
    pub text: String,
    /// Posting time (naive local time); may be absent
    #[serde(default)]
    pub time: Option<NaiveDateTime>,
    /// Latitude of the posting location, degrees
    pub lat: f64,
    /// Longitude of the posting location, degrees
    pub lon: f64,
}

impl Tweet {
    /// Create a new tweet without a timestamp
    pub fn new(text: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            text: text.into(),
            time: None,
            lat,
            lon,
        }
    }

    /// Set the posting time
    pub fn with_time(mut self, time: NaiveDateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The tweet's location as a position
    pub fn position(&self) -> Position {
        Position::new(self.lat, self.lon)
    }
}

impl fmt::Display for Tweet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" @ {}", self.text, self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_position_accessors() {
        let t = Tweet::new("just ate lunch", 38.0, 74.0);
        let p = t.position();
        assert_eq!(p.lat, 38.0);
        assert_eq!(p.lon, 74.0);
    }

    #[test]
    fn test_with_time() {
        let time = NaiveDate::from_ymd_opt(2012, 9, 24)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap();
        let t = Tweet::new("just ate lunch", 38.0, 74.0).with_time(time);
        assert_eq!(t.time.unwrap().format("%H").to_string(), "13");
    }

    #[test]
    fn test_display() {
        let t = Tweet::new("welcome to san francisco", 38.0, -122.0);
        assert_eq!(t.to_string(), "\"welcome to san francisco\" @ (38, -122)");
    }
}
