//! Route and route set types.

use std::collections::HashMap;

use super::Point;
use crate::error::{ProximityError, Result};

/// A named polyline: an ordered sequence of points.
///
/// An empty polyline is allowed; it is never closer than any threshold to
/// another route, so it ends up with no neighbors.
///
/// # Examples
///
/// ```
/// use route_proximity::models::{Point, Route};
///
/// let route = Route::new("R1", vec![Point::new(0.0, 0.0), Point::new(0.0, 0.001)]);
/// assert_eq!(route.name(), "R1");
/// assert_eq!(route.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    name: String,
    points: Vec<Point>,
}

impl Route {
    /// Creates a route from a name and its points.
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Route identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points in polyline order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// An ordered collection of uniquely named routes.
///
/// Order is the input order and drives iteration and output order only.
///
/// # Examples
///
/// ```
/// use route_proximity::models::{Point, Route, RouteSet};
///
/// let routes = RouteSet::new(vec![
///     Route::new("A", vec![Point::new(0.0, 0.0)]),
///     Route::new("B", vec![Point::new(1.0, 1.0)]),
/// ]).unwrap();
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes.get("B").map(|r| r.len()), Some(1));
/// assert!(routes.get("C").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    routes: Vec<Route>,
    by_name: HashMap<String, usize>,
}

impl RouteSet {
    /// Creates a route set, rejecting duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::DuplicateRouteName`] naming both indices of
    /// the first repeated name.
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(routes.len());
        for (i, route) in routes.iter().enumerate() {
            if let Some(&first) = by_name.get(route.name()) {
                return Err(ProximityError::DuplicateRouteName {
                    name: route.name().to_string(),
                    first,
                    second: i,
                });
            }
            by_name.insert(route.name().to_string(), i);
        }
        Ok(Self { routes, by_name })
    }

    /// Routes in input order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Looks up a route by name.
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.index_of(name).map(|i| &self.routes[i])
    }

    /// Position of the named route in input order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the set has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Total number of points across all routes.
    pub fn total_points(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Iterates routes in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }
}

impl<'a> IntoIterator for &'a RouteSet {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
