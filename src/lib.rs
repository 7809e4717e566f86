//! # Geo Sentiment
//!
//! Aggregate sentiment statistics for geotagged short text messages,
//! grouped by the nearest region (e.g., a U.S. state) or by the hour of
//! day each message was posted.
//!
//! ## Modules
//!
//! - `data` - tweet and position types, tokenization, JSON input loading
//! - `sentiment` - lexicon-based word and per-tweet sentiment scoring
//! - `geometry` - polygon centroids (shoelace formula) and region centers
//! - `trends` - grouping by nearest region or hour, average-sentiment maps
//!
//! ## Example Usage
//!
//! ```
//! use geo_sentiment::{
//!     average_sentiments, group_by_region, region_centers, Polygon, Position,
//!     Region, SentimentLexicon, Tweet, TweetAnalyzer,
//! };
//! use std::collections::BTreeMap;
//!
//! let lexicon = SentimentLexicon::from_entries(vec![("love", 0.625)]).unwrap();
//! let analyzer = TweetAnalyzer::new(lexicon);
//!
//! let square = Polygon::new(vec![
//!     Position::new(37.0, -123.0),
//!     Position::new(37.0, -121.0),
//!     Position::new(39.0, -121.0),
//!     Position::new(39.0, -123.0),
//!     Position::new(37.0, -123.0),
//! ]);
//! let regions = BTreeMap::from([("CA".to_string(), Region::new(vec![square]))]);
//! let centers = region_centers(&regions).unwrap();
//!
//! let tweets = vec![Tweet::new("love the bay", 38.0, -122.0)];
//! let groups = group_by_region(&tweets, &centers).unwrap();
//! let averages = average_sentiments(&groups, &analyzer);
//! assert_eq!(averages.get("CA"), Some(&0.625));
//! ```

pub mod data;
pub mod error;
pub mod geometry;
pub mod sentiment;
pub mod trends;

// Re-exports for convenience
pub use data::{load_lexicon, load_regions, load_tweets, Position, Tokenizer, Tweet};
pub use error::TrendsError;
pub use geometry::{geo_distance, Polygon, Region};
pub use sentiment::{Sentiment, SentimentLexicon, TweetAnalyzer};
pub use trends::{
    average_sentiments, group_by_hour, group_by_region, most_active_region, nearest_region,
    region_centers,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
