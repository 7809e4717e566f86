//! # Polygon Geometry
//!
//! Signed area and centroid of closed polygon rings via the shoelace
//! formula. Latitude and longitude are treated as flat planar coordinates
//! here; this is an accepted approximation, not a geodesic calculation.

use crate::data::Position;
use serde::{Deserialize, Serialize};

/// A closed polygon ring
///
/// An ordered sequence of at least two positions where the first and last
/// vertex coincide, closing the ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Ring vertices, first == last
    pub vertices: Vec<Position>,
}

impl Polygon {
    /// Create a polygon from its ring vertices
    pub fn new(vertices: Vec<Position>) -> Self {
        Self { vertices }
    }

    /// Centroid and area of the ring
    ///
    /// Returns `(centroid_lat, centroid_lon, area)` with the area as a
    /// magnitude. The signed shoelace area is used internally so the
    /// centroid is independent of vertex winding direction.
    ///
    /// A degenerate ring whose signed area is exactly zero (collinear or
    /// repeated vertices) yields the first vertex and zero area; this is a
    /// defined result, not an error. A ring with no vertices at all covers
    /// no area and yields the origin, so it carries zero weight in any
    /// region center.
    pub fn centroid_and_area(&self) -> (f64, f64, f64) {
        let Some(&first) = self.vertices.first() else {
            return (0.0, 0.0, 0.0);
        };

        let n = self.vertices.len();
        let mut signed_area = 0.0;
        for i in 0..n - 1 {
            let a = self.vertices[i];
            let b = self.vertices[i + 1];
            signed_area += a.lat * b.lon - b.lat * a.lon;
        }
        signed_area /= 2.0;

        if signed_area == 0.0 {
            return (first.lat, first.lon, 0.0);
        }

        let mut centroid_lat = 0.0;
        let mut centroid_lon = 0.0;
        for i in 0..n - 1 {
            let a = self.vertices[i];
            let b = self.vertices[i + 1];
            let cross = a.lat * b.lon - b.lat * a.lon;
            centroid_lat += (a.lat + b.lat) * cross;
            centroid_lon += (a.lon + b.lon) * cross;
        }
        centroid_lat /= 6.0 * signed_area;
        centroid_lon /= 6.0 * signed_area;

        (centroid_lat, centroid_lon, signed_area.abs())
    }
}
