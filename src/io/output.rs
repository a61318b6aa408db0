//! Graph document serialization.
//!
//! Writes `{"graph": [{"route": ..., "neighbors": [{"route": ..., "distance_km": ...}]}]}`
//! pretty-printed with two-space indentation. Distances keep full `f64`
//! precision.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::{ProximityError, Result};
use crate::models::Graph;

#[derive(Serialize)]
struct GraphDocument<'a> {
    graph: &'a Graph,
}

/// Renders the graph document as pretty-printed JSON.
///
/// # Examples
///
/// ```
/// use route_proximity::io::graph_to_json;
/// use route_proximity::models::{Adjacency, Graph};
///
/// let graph = Graph::from_adjacencies(vec![
///     Adjacency { route: "A".into(), neighbors: vec![] },
/// ]);
/// let json = graph_to_json(&graph).unwrap();
/// assert!(json.starts_with("{\n  \"graph\": ["));
/// ```
pub fn graph_to_json(graph: &Graph) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GraphDocument { graph })
}

/// Writes the graph document to `path`, replacing any existing file.
///
/// The document is rendered fully in memory first, so a failed run never
/// leaves a half-written graph behind from serialization.
///
/// # Errors
///
/// Returns [`ProximityError::OutputUnavailable`] if the file cannot be written.
pub fn save_graph(path: &Path, graph: &Graph) -> Result<()> {
    let unavailable = |source: io::Error| ProximityError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let json = graph_to_json(graph).map_err(|e| unavailable(e.into()))?;
    fs::write(path, json).map_err(unavailable)?;
    info!(path = %path.display(), routes = graph.len(), edges = graph.edge_count(), "graph saved");
    Ok(())
}
