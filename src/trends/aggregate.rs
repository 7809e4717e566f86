//! # Aggregation
//!
//! Group-level average sentiment with explicit exclusion rules for
//! sentiment-less messages.

use crate::data::Tweet;
use crate::sentiment::TweetAnalyzer;
use std::collections::BTreeMap;

/// Average sentiment per group
///
/// For each group, tweets whose sentiment is unknown are excluded and the
/// remaining values are averaged. A group with no sentiment-bearing tweets
/// is omitted from the result entirely; a genuinely neutral average of 0.0
/// is a real value and stays in. Works for any ordered group key (region
/// identifiers, hours of day).
pub fn average_sentiments<K: Ord + Clone>(
    groups: &BTreeMap<K, Vec<&Tweet>>,
    analyzer: &TweetAnalyzer,
) -> BTreeMap<K, f64> {
    let mut averages = BTreeMap::new();
    for (key, tweets) in groups {
        let mut total = 0.0;
        let mut count = 0usize;
        for tweet in tweets {
            if let Some(value) = analyzer.message_sentiment(tweet).as_option() {
                total += value;
                count += 1;
            }
        }
        if count > 0 {
            averages.insert(key.clone(), total / count as f64);
        }
    }
    averages
}

/// The region with the most tweets containing a term
///
/// Counts tweets whose text contains `term` as a substring, per region
/// bucket. Returns `None` when no tweet in any bucket contains the term;
/// ties resolve to the lexicographically smallest region identifier. Both
/// rules are deliberate: a term nobody tweeted has no meaningful "most
/// active" region, and smallest-id tie-breaking matches the nearest-region
/// convention rather than favoring the largest identifier.
pub fn most_active_region<'a>(
    groups: &'a BTreeMap<String, Vec<&Tweet>>,
    term: &str,
) -> Option<&'a str> {
    let mut best: Option<(usize, &str)> = None;
    for (id, tweets) in groups {
        let count = tweets.iter().filter(|t| t.text.contains(term)).count();
        if count == 0 {
            continue;
        }
        match best {
            Some((best_count, _)) if count <= best_count => {}
            _ => best = Some((count, id)),
        }
    }
    best.map(|(_, id)| id)
}
