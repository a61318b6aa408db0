//! Geographic point type.

use crate::distance::haversine_km;

/// A latitude/longitude pair in degrees.
///
/// Ranges are not validated: a latitude above 90° still yields a defined
/// (if not geographically meaningful) distance.
///
/// # Examples
///
/// ```
/// use route_proximity::models::Point;
///
/// let p = Point::new(14.5995, 120.9842);
/// assert_eq!(p.lat(), 14.5995);
/// assert_eq!(p.lon(), 120.9842);
/// assert_eq!(p.distance_to(&p), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    lat: f64,
    lon: f64,
}

impl Point {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_to(&self, other: &Point) -> f64 {
        haversine_km(*self, *other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.lat(), 10.0);
        assert_eq!(p.lon(), 20.0);
    }

    #[test]
    fn test_point_from_tuple() {
        let p: Point = (1.5, -2.5).into();
        assert_eq!(p, Point::new(1.5, -2.5));
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = Point::new(14.55, 121.02);
        let b = Point::new(14.60, 120.98);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-12);
    }
}
