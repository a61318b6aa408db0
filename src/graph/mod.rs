//! Proximity graph construction and queries.
//!
//! - [`build_graph`] — Brute-force all-pairs builder, O(n²·p²)
//! - [`GraphBuilder`] — Same algorithm with parallelism, deadline, and progress
//! - [`nearest_route`] / [`plan_trip`] — Point snapping and fewest-transfer trips

mod builder;
mod planner;
mod progress;

pub use builder::{build_graph, GraphBuilder};
pub use planner::{nearest_route, plan_trip, NearestRoute};
pub use progress::ProgressObserver;
