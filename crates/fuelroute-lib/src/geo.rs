use serde::{Deserialize, Serialize};

/// A geographic point in WGS84 degrees, stored longitude-first to match
/// GeoJSON coordinate order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Whether the point lies within valid WGS84 bounds.
    pub fn in_bounds(&self) -> bool {
        (-180.0..=180.0).contains(&self.lon) && (-90.0..=90.0).contains(&self.lat)
    }
}

/// An ordered, directional route geometry. The first point is the route
/// origin and the last point is the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    points: Vec<GeoPoint>,
}

impl RouteGeometry {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_bounds_check() {
        assert!(GeoPoint::new(-74.006, 40.7128).in_bounds());
        assert!(!GeoPoint::new(-181.0, 0.0).in_bounds());
        assert!(!GeoPoint::new(0.0, 90.5).in_bounds());
    }

    #[test]
    fn geometry_preserves_order() {
        let points = vec![GeoPoint::new(-74.0, 40.7), GeoPoint::new(-118.2, 34.0)];
        let geometry = RouteGeometry::new(points.clone());
        assert_eq!(geometry.points(), &points[..]);
        assert_eq!(geometry.into_points(), points);
    }
}
