//! Trip planning over a proximity graph.
//!
//! Origin and destination are snapped to the route passing closest to
//! them; the route sequence is then the fewest-transfers path through the
//! graph, found by breadth-first search.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::distance::nearest_point;
use crate::models::{Graph, Point, RouteSet};

/// The route passing closest to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestRoute {
    /// Index of the route in the route set.
    pub route_index: usize,
    /// Index of the closest point on that route.
    pub point_index: usize,
    /// Distance from the query point, in kilometers.
    pub distance_km: f64,
}

/// Finds the route whose closest point is nearest to `point`.
///
/// Empty routes are skipped. Returns `None` when no route has points. On
/// ties the route earliest in input order wins.
///
/// # Examples
///
/// ```
/// use route_proximity::models::{Point, Route, RouteSet};
/// use route_proximity::graph::nearest_route;
///
/// let routes = RouteSet::new(vec![
///     Route::new("A", vec![Point::new(0.0, 0.0)]),
///     Route::new("B", vec![Point::new(1.0, 1.0), Point::new(1.0, 1.1)]),
/// ]).unwrap();
/// let hit = nearest_route(Point::new(1.0, 1.09), &routes).unwrap();
/// assert_eq!(hit.route_index, 1);
/// assert_eq!(hit.point_index, 1);
/// ```
pub fn nearest_route(point: Point, routes: &RouteSet) -> Option<NearestRoute> {
    let mut best: Option<NearestRoute> = None;
    for (route_index, route) in routes.iter().enumerate() {
        let Some((point_index, distance_km)) = nearest_point(point, route.points()) else {
            continue;
        };
        if best.map_or(true, |b| distance_km < b.distance_km) {
            best = Some(NearestRoute {
                route_index,
                point_index,
                distance_km,
            });
        }
    }
    best
}

/// Plans a trip from `origin` to `destination` as a sequence of route names.
///
/// Returns a single route when both ends snap to the same route, the
/// fewest-hop chain of neighboring routes otherwise, and `None` when there
/// are no routes or the two ends are not connected in `graph`.
///
/// # Examples
///
/// ```
/// use route_proximity::models::{Point, Route, RouteSet};
/// use route_proximity::graph::{build_graph, plan_trip};
///
/// let routes = RouteSet::new(vec![
///     Route::new("A", vec![Point::new(0.0, 0.00), Point::new(0.0, 0.01)]),
///     Route::new("B", vec![Point::new(0.0, 0.02), Point::new(0.0, 0.03)]),
/// ]).unwrap();
/// let graph = build_graph(&routes, 2.0);
///
/// let trip = plan_trip(Point::new(0.0, 0.0), Point::new(0.0, 0.03), &routes, &graph);
/// assert_eq!(trip, Some(vec!["A".to_string(), "B".to_string()]));
/// ```
pub fn plan_trip(
    origin: Point,
    destination: Point,
    routes: &RouteSet,
    graph: &Graph,
) -> Option<Vec<String>> {
    let start = routes.routes()[nearest_route(origin, routes)?.route_index].name();
    let end = routes.routes()[nearest_route(destination, routes)?.route_index].name();
    debug!(start, end, "trip endpoints snapped");

    if start == end {
        return Some(vec![start.to_string()]);
    }

    let mut previous: HashMap<&str, &str> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    previous.insert(start, start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            let mut path = vec![end.to_string()];
            let mut at = end;
            while at != start {
                at = previous[at];
                path.push(at.to_string());
            }
            path.reverse();
            return Some(path);
        }
        for edge in graph.neighbors(current).unwrap_or_default() {
            let next = edge.route.as_str();
            if !previous.contains_key(next) {
                previous.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::models::Route;

    fn route(name: &str, coords: &[(f64, f64)]) -> Route {
        Route::new(name, coords.iter().map(|&c| Point::from(c)).collect())
    }

    /// A chain A - B - C along the equator, plus an isolated D.
    fn chain() -> RouteSet {
        RouteSet::new(vec![
            route("A", &[(0.0, 0.00), (0.0, 0.01)]),
            route("B", &[(0.0, 0.02), (0.0, 0.03)]),
            route("C", &[(0.0, 0.04), (0.0, 0.05)]),
            route("D", &[(30.0, 30.0)]),
            route("E", &[]),
        ])
        .expect("unique")
    }

    #[test]
    fn test_nearest_route_skips_empty() {
        let routes = chain();
        let hit = nearest_route(Point::new(0.0, 0.051), &routes).expect("hit");
        assert_eq!(hit.route_index, 2);
        assert_eq!(hit.point_index, 1);
    }

    #[test]
    fn test_nearest_route_none_without_points() {
        let routes = RouteSet::new(vec![route("E", &[])]).expect("unique");
        assert!(nearest_route(Point::new(0.0, 0.0), &routes).is_none());
        let empty = RouteSet::new(Vec::new()).expect("empty");
        assert!(nearest_route(Point::new(0.0, 0.0), &empty).is_none());
    }

    #[test]
    fn test_nearest_route_ignores_antipodal_route() {
        let routes = RouteSet::new(vec![
            route("Anti", &[(87.5, 179.9999999)]),
            route("Here", &[(-87.5, 0.0), (-87.0, 0.0)]),
        ])
        .expect("unique");
        let hit = nearest_route(Point::new(-87.5, 0.0), &routes).expect("hit");
        assert_eq!(hit.route_index, 1);
        assert_eq!(hit.point_index, 0);
        assert_eq!(hit.distance_km, 0.0);
    }

    #[test]
    fn test_nearest_route_tie_keeps_first() {
        let routes = RouteSet::new(vec![
            route("West", &[(0.0, -0.01)]),
            route("East", &[(0.0, 0.01)]),
        ])
        .expect("unique");
        let hit = nearest_route(Point::new(0.0, 0.0), &routes).expect("hit");
        assert_eq!(hit.route_index, 0);
    }

    #[test]
    fn test_plan_same_route() {
        let routes = chain();
        let g = build_graph(&routes, 2.0);
        let trip = plan_trip(Point::new(0.0, 0.0), Point::new(0.0, 0.011), &routes, &g);
        assert_eq!(trip, Some(vec!["A".to_string()]));
    }

    #[test]
    fn test_plan_multi_hop() {
        let routes = chain();
        let g = build_graph(&routes, 1.5);
        // A and C are ~3.3 km apart, so the trip must transfer through B.
        assert!(g.edge("A", "C").is_none());
        let trip = plan_trip(Point::new(0.0, 0.0), Point::new(0.0, 0.05), &routes, &g);
        assert_eq!(
            trip,
            Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
        );
    }

    #[test]
    fn test_plan_unreachable() {
        let routes = chain();
        let g = build_graph(&routes, 1.5);
        let trip = plan_trip(Point::new(0.0, 0.0), Point::new(30.0, 30.0), &routes, &g);
        assert!(trip.is_none());
    }

    #[test]
    fn test_plan_prefers_fewest_hops() {
        let routes = chain();
        let g = build_graph(&routes, 5.0);
        let trip = plan_trip(Point::new(0.0, 0.0), Point::new(0.0, 0.05), &routes, &g);
        assert_eq!(trip, Some(vec!["A".to_string(), "C".to_string()]));
    }
}
