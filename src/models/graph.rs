//! Proximity graph types.

use std::collections::HashMap;

use serde::Serialize;

use super::RouteSet;
use crate::distance::RouteDistanceMatrix;

/// A directed edge from a source route to a nearby route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Name of the neighboring route.
    pub route: String,
    /// Minimum separation in kilometers.
    pub distance_km: f64,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(route: impl Into<String>, distance_km: f64) -> Self {
        Self {
            route: route.into(),
            distance_km,
        }
    }
}

/// The neighbor list of a single source route.
///
/// Neighbors follow input order of the other routes, not distance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjacency {
    /// Source route name.
    pub route: String,
    /// Edges to routes closer than the threshold.
    pub neighbors: Vec<Edge>,
}

/// Adjacency lists for every route, in input order.
///
/// # Examples
///
/// ```
/// use route_proximity::models::{Adjacency, Edge, Graph};
///
/// let graph = Graph::from_adjacencies(vec![
///     Adjacency { route: "A".into(), neighbors: vec![Edge::new("B", 1.2)] },
///     Adjacency { route: "B".into(), neighbors: vec![Edge::new("A", 1.2)] },
/// ]);
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbors("A").map(|n| n.len()), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Graph {
    adjacencies: Vec<Adjacency>,
    #[serde(skip)]
    by_route: HashMap<String, usize>,
}

impl Graph {
    /// Wraps per-route adjacency lists, kept in the given order.
    ///
    /// If a route name repeats, lookups resolve to its first list.
    pub fn from_adjacencies(adjacencies: Vec<Adjacency>) -> Self {
        let mut by_route = HashMap::with_capacity(adjacencies.len());
        for (i, a) in adjacencies.iter().enumerate() {
            by_route.entry(a.route.clone()).or_insert(i);
        }
        Self {
            adjacencies,
            by_route,
        }
    }

    /// Assembles a graph from precomputed route-to-route distances.
    ///
    /// Produces the same edges as [`crate::graph::build_graph`] for the
    /// same routes and threshold, without re-running the reducer.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is smaller than the route set.
    pub fn from_matrix(routes: &RouteSet, matrix: &RouteDistanceMatrix, threshold_km: f64) -> Self {
        let all = routes.routes();
        let adjacencies = all
            .iter()
            .enumerate()
            .map(|(i, source)| Adjacency {
                route: source.name().to_string(),
                neighbors: matrix
                    .within(i, threshold_km)
                    .into_iter()
                    .map(|j| Edge::new(all[j].name(), matrix.get(i, j)))
                    .collect(),
            })
            .collect();
        Self::from_adjacencies(adjacencies)
    }

    /// Adjacency lists in input order.
    pub fn adjacencies(&self) -> &[Adjacency] {
        &self.adjacencies
    }

    /// Neighbors of the named route, or `None` if the route is unknown.
    pub fn neighbors(&self, route: &str) -> Option<&[Edge]> {
        self.by_route
            .get(route)
            .map(|&i| self.adjacencies[i].neighbors.as_slice())
    }

    /// Distance of the edge `from -> to`, if present.
    pub fn edge(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbors(from)?
            .iter()
            .find(|e| e.route == to)
            .map(|e| e.distance_km)
    }

    /// Number of source routes.
    pub fn len(&self) -> usize {
        self.adjacencies.len()
    }

    /// Returns `true` if the graph has no routes.
    pub fn is_empty(&self) -> bool {
        self.adjacencies.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacencies.iter().map(|a| a.neighbors.len()).sum()
    }
}
