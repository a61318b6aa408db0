//! Domain model types for route proximity graphs.
//!
//! Provides points, named routes (polylines), validated route sets, and the
//! adjacency structure produced by the graph builder.

mod graph;
mod point;
mod route;

pub use graph::{Adjacency, Edge, Graph};
pub use point::Point;
pub use route::{Route, RouteSet};
