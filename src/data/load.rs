//! # Data Loading
//!
//! JSON readers for the three external inputs: tweets, the word sentiment
//! lexicon, and region polygon geometry. File formats live entirely at
//! this boundary; the core pipeline only sees the in-memory types.

use crate::data::{Position, Tweet};
use crate::error::TrendsError;
use crate::geometry::{Polygon, Region};
use crate::sentiment::SentimentLexicon;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

fn read_file(path: &Path) -> Result<String, TrendsError> {
    fs::read_to_string(path).map_err(|source| TrendsError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn parse_error(path: &Path, source: serde_json::Error) -> TrendsError {
    TrendsError::Parse {
        path: path.display().to_string(),
        source,
    }
}

/// Load tweets from a JSON array of `{text, time?, lat, lon}` records
pub fn load_tweets(path: impl AsRef<Path>) -> Result<Vec<Tweet>, TrendsError> {
    let path = path.as_ref();
    let raw = read_file(path)?;
    let tweets: Vec<Tweet> = serde_json::from_str(&raw).map_err(|e| parse_error(path, e))?;
    debug!(count = tweets.len(), path = %path.display(), "loaded tweets");
    Ok(tweets)
}

/// Load a word sentiment lexicon from a JSON object of `{word: score}`
///
/// Every score is validated against [-1, 1] on insertion; a single
/// out-of-range entry fails the whole load.
pub fn load_lexicon(path: impl AsRef<Path>) -> Result<SentimentLexicon, TrendsError> {
    let path = path.as_ref();
    let raw = read_file(path)?;
    let entries: BTreeMap<String, f64> =
        serde_json::from_str(&raw).map_err(|e| parse_error(path, e))?;
    let lexicon = SentimentLexicon::from_entries(entries)?;
    debug!(words = lexicon.len(), path = %path.display(), "loaded lexicon");
    Ok(lexicon)
}

/// Load region geometry from a JSON object of
/// `{region_id: [[[lat, lon], ...], ...]}` closed rings
pub fn load_regions(path: impl AsRef<Path>) -> Result<BTreeMap<String, Region>, TrendsError> {
    let path = path.as_ref();
    let raw = read_file(path)?;
    let rings: BTreeMap<String, Vec<Vec<[f64; 2]>>> =
        serde_json::from_str(&raw).map_err(|e| parse_error(path, e))?;
    let regions = rings
        .into_iter()
        .map(|(id, polygons)| {
            let polygons = polygons
                .into_iter()
                .map(|ring| {
                    Polygon::new(
                        ring.into_iter()
                            .map(|[lat, lon]| Position::new(lat, lon))
                            .collect(),
                    )
                })
                .collect();
            (id, Region::new(polygons))
        })
        .collect::<BTreeMap<_, _>>();
    debug!(regions = regions.len(), path = %path.display(), "loaded region geometry");
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tweet_json_roundtrip() {
        let json = r#"[
            {"text": "just ate lunch", "time": "2012-09-24T13:00:00", "lat": 38.0, "lon": -122.0},
            {"text": "no timestamp here", "lat": 41.0, "lon": -74.0}
        ]"#;
        let tweets: Vec<Tweet> = serde_json::from_str(json).unwrap();
        assert_eq!(tweets.len(), 2);
        assert!(tweets[0].time.is_some());
        assert!(tweets[1].time.is_none());
        assert_eq!(tweets[1].position(), Position::new(41.0, -74.0));
    }

    #[test]
    fn test_lexicon_json_shape() {
        let entries: BTreeMap<String, f64> =
            serde_json::from_str(r#"{"good": 0.875, "bad": -0.625}"#).unwrap();
        let lexicon = SentimentLexicon::from_entries(entries).unwrap();
        assert_eq!(lexicon.word_sentiment("good").value().unwrap(), 0.875);
    }

    #[test]
    fn test_region_json_shape() {
        let rings: BTreeMap<String, Vec<Vec<[f64; 2]>>> = serde_json::from_str(
            r#"{"CA": [[[1.0, 2.0], [3.0, 4.0], [5.0, 0.0], [1.0, 2.0]]]}"#,
        )
        .unwrap();
        assert_eq!(rings["CA"][0].len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_tweets("/nonexistent/tweets.json").unwrap_err();
        assert!(matches!(err, TrendsError::Io { .. }));
    }
}
