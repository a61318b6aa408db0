//! Dense route-to-route distance matrix.

use super::min_route_distance;
use crate::models::RouteSet;

/// A dense n×n matrix of route-pair minimum distances, row-major.
///
/// The diagonal is zero. Pairs involving an empty route hold
/// `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// use route_proximity::models::{Point, Route, RouteSet};
/// use route_proximity::distance::RouteDistanceMatrix;
///
/// let routes = RouteSet::new(vec![
///     Route::new("A", vec![Point::new(0.0, 0.0)]),
///     Route::new("B", vec![Point::new(0.0, 1.0)]),
/// ]).unwrap();
/// let dm = RouteDistanceMatrix::from_routes(&routes);
/// assert!((dm.get(0, 1) - 111.19).abs() < 0.01);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RouteDistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl RouteDistanceMatrix {
    /// Zero-filled matrix covering `routes` routes.
    fn zeroed(routes: usize) -> Self {
        Self {
            data: vec![0.0; routes * routes],
            size: routes,
        }
    }

    /// Computes every pairwise route minimum once and mirrors it.
    pub fn from_routes(routes: &RouteSet) -> Self {
        let routes = routes.routes();
        let n = routes.len();
        let mut dm = Self::zeroed(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = min_route_distance(routes[i].points(), routes[j].points());
                dm.store(i, j, d);
                dm.store(j, i, d);
            }
        }
        dm
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Minimum separation in km between routes `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below [`size`](Self::size).
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.data[self.offset(a, b)]
    }

    fn store(&mut self, a: usize, b: usize, km: f64) {
        let at = self.offset(a, b);
        self.data[at] = km;
    }

    /// Number of routes covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Infinite entries compare equal to each other.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Indices of routes strictly closer than `threshold_km` to `from`,
    /// excluding `from` itself, in index order.
    pub fn within(&self, from: usize, threshold_km: f64) -> Vec<usize> {
        (0..self.size)
            .filter(|&j| j != from && self.get(from, j) < threshold_km)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, Route};

    fn sample_routes() -> RouteSet {
        RouteSet::new(vec![
            Route::new("A", vec![Point::new(0.0, 0.0), Point::new(0.0, 0.001)]),
            Route::new("B", vec![Point::new(0.0, 0.01), Point::new(0.0, 0.011)]),
            Route::new("C", vec![Point::new(20.0, 20.0)]),
            Route::new("D", Vec::new()),
        ])
        .expect("unique")
    }

    #[test]
    fn test_from_routes() {
        let dm = RouteDistanceMatrix::from_routes(&sample_routes());
        assert_eq!(dm.size(), 4);
        assert_eq!(dm.get(0, 0), 0.0);
        assert!(dm.get(0, 1) > 1.0 && dm.get(0, 1) < 1.2);
        assert!(dm.get(0, 2) > 1000.0);
        assert_eq!(dm.get(3, 0), f64::INFINITY);
    }

    #[test]
    fn test_symmetric() {
        let dm = RouteDistanceMatrix::from_routes(&sample_routes());
        assert!(dm.is_symmetric(1e-12));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = RouteDistanceMatrix::zeroed(2);
        dm.store(0, 1, 10.0);
        dm.store(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_within() {
        let dm = RouteDistanceMatrix::from_routes(&sample_routes());
        assert_eq!(dm.within(0, 2.0), vec![1]);
        assert_eq!(dm.within(1, 2.0), vec![0]);
        assert!(dm.within(2, 2.0).is_empty());
        assert!(dm.within(3, f64::MAX).is_empty());
    }

    #[test]
    fn test_within_strict_threshold() {
        let mut dm = RouteDistanceMatrix::zeroed(2);
        dm.store(0, 1, 2.0);
        assert!(dm.within(0, 2.0).is_empty());
        assert_eq!(dm.within(0, 2.0 + 1e-9), vec![1]);
    }
}
