//! # Trends Module
//!
//! Grouping of tweets by nearest region or hour of day, and group-level
//! sentiment aggregation.

mod aggregate;
mod group;

pub use aggregate::{average_sentiments, most_active_region};
pub use group::{group_by_hour, group_by_region, nearest_region, region_centers};
