//! Input and output boundary.
//!
//! Loads route documents into a validated [`RouteSet`](crate::models::RouteSet)
//! and writes the adjacency document.

mod input;
mod output;

pub use input::{load_routes, parse_routes, read_routes};
pub use output::{graph_to_json, save_graph};
