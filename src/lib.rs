//! # route-proximity
//!
//! Proximity graph over named geographic routes. Every ordered pair of
//! distinct routes is compared point-by-point with the haversine formula,
//! and an edge is recorded when the closest approach is below a threshold.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Route, RouteSet, Edge, Graph)
//! - [`distance`] — Haversine kernel, route-pair minimum, route distance matrix
//! - [`graph`] — Graph builder, progress hook, nearest route and trip planning
//! - [`io`] — Route document loading and graph document writing
//! - [`config`] — Run configuration and defaults
//! - [`error`] — Error taxonomy

pub mod config;
pub mod distance;
pub mod error;
pub mod graph;
pub mod io;
pub mod models;

pub use error::{ProximityError, Result};
