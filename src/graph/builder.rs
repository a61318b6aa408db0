//! All-pairs proximity graph builder.
//!
//! For every ordered pair of distinct routes, computes the minimum
//! great-circle distance between their polylines and records an edge when
//! it is strictly below the threshold.
//!
//! # Complexity
//!
//! O(n²·p²) where n = number of routes and p = average points per route.
//! Each ordered pair is reduced independently, so `A -> B` and `B -> A`
//! are both computed.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use super::ProgressObserver;
use crate::distance::min_route_distance;
use crate::error::{ProximityError, Result};
use crate::models::{Adjacency, Edge, Graph, Route, RouteSet};

/// Builds the proximity graph sequentially with no progress reporting.
///
/// # Examples
///
/// ```
/// use route_proximity::models::{Point, Route, RouteSet};
/// use route_proximity::graph::build_graph;
///
/// let routes = RouteSet::new(vec![
///     Route::new("R1", vec![Point::new(0.0, 0.0), Point::new(0.0, 0.001)]),
///     Route::new("R2", vec![Point::new(0.0, 0.01), Point::new(0.0, 0.011)]),
/// ]).unwrap();
///
/// let graph = build_graph(&routes, 2.0);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.edge("R1", "R2"), graph.edge("R2", "R1"));
/// ```
pub fn build_graph(routes: &RouteSet, threshold_km: f64) -> Graph {
    let all = routes.routes();
    let adjacencies = (0..all.len())
        .map(|i| adjacency_for(all, i, threshold_km))
        .collect();
    Graph::from_adjacencies(adjacencies)
}

/// Neighbor list of `routes[source]`, following input order.
fn adjacency_for(routes: &[Route], source: usize, threshold_km: f64) -> Adjacency {
    let from = &routes[source];
    let neighbors = routes
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != source)
        .filter_map(|(_, to)| {
            let d = min_route_distance(from.points(), to.points());
            (d < threshold_km).then(|| Edge::new(to.name(), d))
        })
        .collect();
    Adjacency {
        route: from.name().to_string(),
        neighbors,
    }
}

/// Configurable graph builder.
///
/// Adds parallel execution over source routes, a deadline checked between
/// source routes, and progress notifications. The resulting graph is
/// identical to [`build_graph`] whenever the build completes.
///
/// # Examples
///
/// ```
/// use route_proximity::models::{Point, Route, RouteSet};
/// use route_proximity::graph::GraphBuilder;
///
/// let routes = RouteSet::new(vec![
///     Route::new("A", vec![Point::new(0.0, 0.0)]),
///     Route::new("B", vec![Point::new(0.0, 0.005)]),
///     Route::new("C", vec![Point::new(45.0, 45.0)]),
/// ]).unwrap();
///
/// let graph = GraphBuilder::new(2.0)
///     .with_parallel(true)
///     .build(&routes, &())
///     .unwrap();
/// assert_eq!(graph.neighbors("C").map(|n| n.len()), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    threshold_km: f64,
    parallel: bool,
    deadline: Option<Instant>,
}

impl GraphBuilder {
    /// Creates a sequential builder with the given threshold and no deadline.
    pub fn new(threshold_km: f64) -> Self {
        Self {
            threshold_km,
            parallel: false,
            deadline: None,
        }
    }

    /// Distributes source routes across the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Stops the build once `deadline` has passed.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Proximity threshold in kilometers.
    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    /// Builds the graph, reporting each completed source route.
    ///
    /// In parallel mode notifications arrive in completion order, but the
    /// returned graph always follows input order.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::DeadlineExceeded`] if the deadline passes
    /// before every source route is processed. No partial graph is returned.
    pub fn build(&self, routes: &RouteSet, observer: &dyn ProgressObserver) -> Result<Graph> {
        let started = Instant::now();
        let all = routes.routes();
        let total = all.len();
        info!(
            routes = total,
            points = routes.total_points(),
            threshold_km = self.threshold_km,
            parallel = self.parallel,
            "building proximity graph"
        );

        let process = |i: usize| -> Option<Adjacency> {
            if self.expired() {
                return None;
            }
            let adjacency = adjacency_for(all, i, self.threshold_km);
            debug!(route = %adjacency.route, neighbors = adjacency.neighbors.len(), "route processed");
            observer.route_processed(i, total, &adjacency.route);
            Some(adjacency)
        };

        let adjacencies = if self.parallel {
            let results: Vec<Option<Adjacency>> = (0..total).into_par_iter().map(process).collect();
            let processed = results.iter().filter(|r| r.is_some()).count();
            results
                .into_iter()
                .collect::<Option<Vec<_>>>()
                .ok_or(ProximityError::DeadlineExceeded { processed, total })?
        } else {
            let mut adjacencies = Vec::with_capacity(total);
            for i in 0..total {
                match process(i) {
                    Some(a) => adjacencies.push(a),
                    None => {
                        return Err(ProximityError::DeadlineExceeded {
                            processed: i,
                            total,
                        })
                    }
                }
            }
            adjacencies
        };

        let graph = Graph::from_adjacencies(adjacencies);
        info!(
            edges = graph.edge_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "proximity graph built"
        );
        observer.finished(graph.edge_count());
        Ok(graph)
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
