//! Error types for loading routes, building graphs, and writing output.

use std::io;
use std::path::PathBuf;

/// Errors produced by the proximity pipeline.
///
/// The distance kernel and reducer never fail; every variant here belongs
/// either to the I/O boundary, to configuration, or to an optional build
/// deadline.
#[derive(Debug, thiserror::Error)]
pub enum ProximityError {
    /// The input document could not be opened or read.
    #[error("failed to open {}: {source}", .path.display())]
    InputUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The input is not a valid route document.
    #[error("malformed route document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// A single route record is missing fields or has a bad coordinate.
    #[error("malformed route at index {index}{}: {reason}", .name.as_deref().map(|n| format!(" ({n})")).unwrap_or_default())]
    MalformedRoute {
        /// Zero-based position of the record in the input.
        index: usize,
        /// Route name, when the record has one.
        name: Option<String>,
        /// What is wrong with the record.
        reason: String,
    },

    /// Two routes share a name.
    #[error("duplicate route name {name:?} at indices {first} and {second}")]
    DuplicateRouteName {
        /// The repeated name.
        name: String,
        /// Index of the first occurrence.
        first: usize,
        /// Index of the repeated occurrence.
        second: usize,
    },

    /// The proximity threshold is not a finite positive number.
    #[error("invalid threshold {0} km: must be finite and greater than zero")]
    InvalidThreshold(f64),

    /// The build deadline expired between source routes.
    #[error("deadline exceeded after {processed} of {total} routes")]
    DeadlineExceeded {
        /// Source routes fully processed before the deadline.
        processed: usize,
        /// Total number of source routes.
        total: usize,
    },

    /// The output document could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    OutputUnavailable {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProximityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_route_message_with_name() {
        let err = ProximityError::MalformedRoute {
            index: 3,
            name: Some("01A".to_string()),
            reason: "coordinate 2 has 1 component(s)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed route at index 3 (01A): coordinate 2 has 1 component(s)"
        );
    }

    #[test]
    fn test_malformed_route_message_without_name() {
        let err = ProximityError::MalformedRoute {
            index: 0,
            name: None,
            reason: "missing field `name`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed route at index 0: missing field `name`"
        );
    }

    #[test]
    fn test_input_unavailable_names_path() {
        let err = ProximityError::InputUnavailable {
            path: PathBuf::from("D1_routes.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("D1_routes.json"));
    }
}
