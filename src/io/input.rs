//! Route document parsing and validation.
//!
//! The document is a JSON object whose `jeepneyRoute` array holds records
//! with a `name` and a `coordinates` list of `[latitude, longitude]` pairs.
//! Records are validated once here so the builder only sees typed data.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{ProximityError, Result};
use crate::models::{Point, Route, RouteSet};

#[derive(Debug, Deserialize)]
struct RouteDocument {
    #[serde(rename = "jeepneyRoute")]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    name: Option<String>,
    coordinates: Option<Vec<Vec<f64>>>,
}

impl RawRoute {
    /// Converts to a typed route, failing on the first defect.
    ///
    /// Extra coordinate components beyond latitude and longitude are ignored.
    fn into_route(self, index: usize) -> Result<Route> {
        let malformed = |name: Option<String>, reason: String| ProximityError::MalformedRoute {
            index,
            name,
            reason,
        };

        let name = self
            .name
            .ok_or_else(|| malformed(None, "missing field `name`".to_string()))?;
        let coordinates = self
            .coordinates
            .ok_or_else(|| malformed(Some(name.clone()), "missing field `coordinates`".to_string()))?;

        let mut points = Vec::with_capacity(coordinates.len());
        for (i, c) in coordinates.iter().enumerate() {
            match c.as_slice() {
                [lat, lon, ..] => points.push(Point::new(*lat, *lon)),
                _ => {
                    return Err(malformed(
                        Some(name),
                        format!("coordinate {i} has {} component(s), expected 2", c.len()),
                    ))
                }
            }
        }
        Ok(Route::new(name, points))
    }
}

/// Parses a route document from a string.
///
/// # Errors
///
/// - [`ProximityError::MalformedDocument`] if the text is not a route document
/// - [`ProximityError::MalformedRoute`] for the first invalid record
/// - [`ProximityError::DuplicateRouteName`] if two records share a name
///
/// # Examples
///
/// ```
/// use route_proximity::io::parse_routes;
///
/// let routes = parse_routes(r#"{
///     "jeepneyRoute": [
///         { "name": "R1", "coordinates": [[0.0, 0.0], [0.0, 0.001]] }
///     ]
/// }"#).unwrap();
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes.get("R1").unwrap().len(), 2);
/// ```
pub fn parse_routes(text: &str) -> Result<RouteSet> {
    let document: RouteDocument = serde_json::from_str(text)?;
    validate(document)
}

/// Reads and validates a route document from any reader.
pub fn read_routes<R: Read>(reader: R) -> Result<RouteSet> {
    let document: RouteDocument = serde_json::from_reader(reader)?;
    validate(document)
}

/// Opens `path` and loads its routes.
///
/// # Errors
///
/// Returns [`ProximityError::InputUnavailable`] if the file cannot be
/// opened, plus any error from [`read_routes`].
pub fn load_routes(path: &Path) -> Result<RouteSet> {
    let file = File::open(path).map_err(|source| ProximityError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let routes = read_routes(BufReader::new(file)).map_err(|e| match e {
        ProximityError::MalformedDocument(e) if e.is_io() => ProximityError::InputUnavailable {
            path: path.to_path_buf(),
            source: e.into(),
        },
        other => other,
    })?;
    info!(
        path = %path.display(),
        routes = routes.len(),
        points = routes.total_points(),
        "routes loaded"
    );
    Ok(routes)
}

fn validate(document: RouteDocument) -> Result<RouteSet> {
    let routes = document
        .routes
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_route(i))
        .collect::<Result<Vec<_>>>()?;
    RouteSet::new(routes)
}
