//! # Geometry Module
//!
//! Polygon centroids, region centers, and geographic distance.

mod polygon;
mod region;

pub use polygon::Polygon;
pub use region::{geo_distance, Region};
