//! # Grouping
//!
//! Nearest-region matching and partitioning of tweets by region or by
//! hour of day.

use crate::data::{Position, Tweet};
use crate::error::TrendsError;
use crate::geometry::{geo_distance, Region};
use std::collections::BTreeMap;

/// Compute the center of every region in a geometry table
///
/// Fails on the first region whose center is undefined (no polygons or
/// zero total area).
pub fn region_centers(
    regions: &BTreeMap<String, Region>,
) -> Result<BTreeMap<String, Position>, TrendsError> {
    let mut centers = BTreeMap::new();
    for (id, region) in regions {
        centers.insert(id.clone(), region.center()?);
    }
    Ok(centers)
}

/// Identifier of the region whose center is nearest to a point
///
/// Candidates are scanned in ascending identifier order with a strict
/// comparison, so equidistant ties resolve to the lexicographically
/// smallest identifier. Fails when the candidate map is empty.
pub fn nearest_region<'a>(
    point: Position,
    centers: &'a BTreeMap<String, Position>,
) -> Result<&'a str, TrendsError> {
    let mut best: Option<(f64, &str)> = None;
    for (id, center) in centers {
        let dist = geo_distance(point, *center);
        match best {
            Some((best_dist, _)) if dist >= best_dist => {}
            _ => best = Some((dist, id)),
        }
    }
    best.map(|(_, id)| id).ok_or(TrendsError::NoCandidateRegions)
}

/// Partition tweets by their nearest region center
///
/// Every region identifier in `centers` appears as a key, with an empty
/// bucket when no tweet maps to it. Each tweet lands in exactly one
/// bucket, so the total count across buckets equals the input count.
pub fn group_by_region<'a>(
    tweets: &'a [Tweet],
    centers: &BTreeMap<String, Position>,
) -> Result<BTreeMap<String, Vec<&'a Tweet>>, TrendsError> {
    let mut groups: BTreeMap<String, Vec<&'a Tweet>> =
        centers.keys().map(|id| (id.clone(), Vec::new())).collect();
    for tweet in tweets {
        let id = nearest_region(tweet.position(), centers)?;
        groups
            .get_mut(id)
            .ok_or(TrendsError::NoCandidateRegions)?
            .push(tweet);
    }
    Ok(groups)
}

/// Partition tweets by the hour of day they were posted
///
/// All 24 hour keys are always present. Tweets without a timestamp are
/// not assigned to any bucket.
pub fn group_by_hour(tweets: &[Tweet]) -> BTreeMap<u32, Vec<&Tweet>> {
    let mut groups: BTreeMap<u32, Vec<&Tweet>> = (0..24).map(|h| (h, Vec::new())).collect();
    for tweet in tweets {
        if let Some(time) = tweet.time {
            use chrono::Timelike;
            groups.entry(time.hour()).or_default().push(tweet);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Approximate true centers for a few states
    fn us_centers() -> BTreeMap<String, Position> {
        BTreeMap::from([
            ("CA".to_string(), Position::new(37.25389, -119.61439)),
            ("NJ".to_string(), Position::new(40.19028, -74.67393)),
            ("NY".to_string(), Position::new(42.94545, -75.52684)),
            ("TX".to_string(), Position::new(31.45044, -99.2898)),
        ])
    }

    #[test]
    fn test_region_centers_reject_empty_ring_geometry() {
        use crate::geometry::Polygon;
        let regions = BTreeMap::from([(
            "CA".to_string(),
            Region::new(vec![Polygon::new(vec![])]),
        )]);
        assert!(matches!(
            region_centers(&regions),
            Err(TrendsError::ZeroAreaRegion)
        ));
    }

    #[test]
    fn test_west_coast_tweet_matches_california() {
        let centers = us_centers();
        let sf = Position::new(38.0, -122.0);
        assert_eq!(nearest_region(sf, &centers).unwrap(), "CA");
    }

    #[test]
    fn test_new_york_city_is_closer_to_new_jersey_center() {
        let centers = us_centers();
        let nyc = Position::new(41.0, -74.0);
        assert_eq!(nearest_region(nyc, &centers).unwrap(), "NJ");
    }

    #[test]
    fn test_nearest_region_deterministic() {
        let centers = us_centers();
        let p = Position::new(38.0, -122.0);
        let first = nearest_region(p, &centers).unwrap().to_string();
        for _ in 0..10 {
            assert_eq!(nearest_region(p, &centers).unwrap(), first);
        }
    }

    #[test]
    fn test_equidistant_tie_picks_smallest_id() {
        let centers = BTreeMap::from([
            ("AA".to_string(), Position::new(0.0, 10.0)),
            ("ZZ".to_string(), Position::new(0.0, -10.0)),
        ]);
        let midpoint = Position::new(0.0, 0.0);
        assert_eq!(nearest_region(midpoint, &centers).unwrap(), "AA");
    }

    #[test]
    fn test_empty_candidates_fails() {
        let centers = BTreeMap::new();
        assert!(matches!(
            nearest_region(Position::new(0.0, 0.0), &centers),
            Err(TrendsError::NoCandidateRegions)
        ));
    }

    #[test]
    fn test_group_by_region_conserves_count() {
        let centers = us_centers();
        let tweets = vec![
            Tweet::new("welcome to san francisco", 38.0, -122.0),
            Tweet::new("welcome to new york", 41.0, -74.0),
            Tweet::new("howdy", 30.0, -98.0),
            Tweet::new("another bay area tweet", 37.5, -122.2),
        ];
        let groups = group_by_region(&tweets, &centers).unwrap();
        let total: usize = groups.values().map(|v| v.len()).sum();
        assert_eq!(total, tweets.len());
        assert_eq!(groups["CA"].len(), 2);
        assert_eq!(groups["NJ"].len(), 1);
        assert_eq!(groups["TX"].len(), 1);
    }

    #[test]
    fn test_group_by_region_seeds_empty_buckets() {
        let centers = us_centers();
        let tweets = vec![Tweet::new("welcome to san francisco", 38.0, -122.0)];
        let groups = group_by_region(&tweets, &centers).unwrap();
        assert_eq!(groups.len(), centers.len());
        assert!(groups["NY"].is_empty());
        assert!(groups["TX"].is_empty());
    }

    #[test]
    fn test_group_by_hour_has_all_24_keys() {
        let noon = NaiveDate::from_ymd_opt(2012, 9, 24)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let tweets = vec![
            Tweet::new("lunch time", 38.0, -122.0).with_time(noon),
            Tweet::new("no clock on this one", 41.0, -74.0),
        ];
        let groups = group_by_hour(&tweets);
        assert_eq!(groups.len(), 24);
        assert_eq!(groups[&12].len(), 1);
        // The timestamp-less tweet is in no bucket
        let total: usize = groups.values().map(|v| v.len()).sum();
        assert_eq!(total, 1);
    }
}
