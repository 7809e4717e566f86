//! # Region Geometry
//!
//! Multi-polygon regions, their area-weighted centers, and the
//! great-circle distance used for nearest-region matching.

use crate::data::Position;
use crate::error::TrendsError;
use crate::geometry::Polygon;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A named area composed of one or more closed polygons
///
/// Multi-part geometry covers regions with islands or disjoint parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// The region's polygon rings
    pub polygons: Vec<Polygon>,
}

impl Region {
    /// Create a region from its polygons
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// The region's center: the area-weighted average of its polygon
    /// centroids
    ///
    /// Fails when the region has no polygons or when every polygon is
    /// degenerate (zero total area); a division by zero is never coerced
    /// to a NaN center.
    pub fn center(&self) -> Result<Position, TrendsError> {
        let mut weighted_lat = 0.0;
        let mut weighted_lon = 0.0;
        let mut total_area = 0.0;
        for polygon in &self.polygons {
            let (lat, lon, area) = polygon.centroid_and_area();
            weighted_lat += lat * area;
            weighted_lon += lon * area;
            total_area += area;
        }
        if total_area == 0.0 {
            return Err(TrendsError::ZeroAreaRegion);
        }
        Ok(Position::new(
            weighted_lat / total_area,
            weighted_lon / total_area,
        ))
    }
}

/// Great-circle (haversine) distance between two positions, kilometers
pub fn geo_distance(a: Position, b: Position) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
