//! Great-circle distance kernel and route-pair reduction.

use crate::models::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points using the haversine formula.
///
/// Always non-negative, zero for identical points, and symmetric in its
/// arguments. Out-of-range coordinates are not rejected.
///
/// # Examples
///
/// ```
/// use route_proximity::distance::haversine_km;
/// use route_proximity::models::Point;
///
/// let d = haversine_km(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(p1: Point, p2: Point) -> f64 {
    // sin² is even, so taking magnitudes keeps swapped arguments bit-identical.
    let d_lat = (p2.lat() - p1.lat()).abs().to_radians();
    let d_lon = (p2.lon() - p1.lon()).abs().to_radians();
    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();

    // Rounding can push `a` just past 1 for near-antipodal pairs.
    let a = (sin_lat * sin_lat
        + p1.lat().to_radians().cos() * p2.lat().to_radians().cos() * sin_lon * sin_lon)
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Minimum great-circle distance between any point of `a` and any point of `b`.
///
/// Brute force over all `|a| * |b|` pairs. Returns `f64::INFINITY` when
/// either polyline is empty, which never passes a finite threshold.
///
/// # Complexity
///
/// O(|a|·|b|).
///
/// # Examples
///
/// ```
/// use route_proximity::distance::min_route_distance;
/// use route_proximity::models::Point;
///
/// let a = [Point::new(0.0, 0.0), Point::new(0.0, 0.001)];
/// let b = [Point::new(0.0, 0.01), Point::new(0.0, 0.011)];
/// let d = min_route_distance(&a, &b);
/// assert!(d > 1.0 && d < 1.2);
/// assert_eq!(min_route_distance(&a, &[]), f64::INFINITY);
/// ```
pub fn min_route_distance(a: &[Point], b: &[Point]) -> f64 {
    let mut min = f64::INFINITY;
    for &p in a {
        for &q in b {
            let d = haversine_km(p, q);
            if d < min {
                min = d;
            }
        }
    }
    min
}

/// Index of the point in `points` closest to `target`, with its distance.
///
/// Returns `None` for an empty polyline or when no distance is finite.
/// The first minimum wins on ties.
pub fn nearest_point(target: Point, points: &[Point]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &p) in points.iter().enumerate() {
        let d = haversine_km(target, p);
        if !d.is_finite() {
            continue;
        }
        if best.map_or(true, |(_, min)| d < min) {
            best = Some((i, d));
        }
    }
    best
}
