//! Run configuration.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::error::{ProximityError, Result};
use crate::graph::GraphBuilder;

/// Input document read when no path is given.
pub const DEFAULT_INPUT: &str = "D1_routes.json";

/// Output document written when no path is given.
pub const DEFAULT_OUTPUT: &str = "routes_graph.json";

/// Default proximity threshold in kilometers.
pub const DEFAULT_THRESHOLD_KM: f64 = 2.0;

/// Settings for one batch run.
///
/// # Examples
///
/// ```
/// use route_proximity::config::Config;
///
/// let config = Config::default().with_threshold_km(0.5).with_parallel(true);
/// assert!(config.validate().is_ok());
/// assert!(Config::default().with_threshold_km(-1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Route document to read.
    pub input: PathBuf,
    /// Graph document to write.
    pub output: PathBuf,
    /// Edges require a route-pair distance strictly below this, in km.
    pub threshold_km: f64,
    /// Build adjacency lists on the rayon thread pool.
    pub parallel: bool,
    /// Abort the build if it runs longer than this.
    pub deadline: Option<Duration>,
    /// Suppress per-route progress lines.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            threshold_km: DEFAULT_THRESHOLD_KM,
            parallel: false,
            deadline: None,
            quiet: false,
        }
    }
}

impl Config {
    /// Sets the proximity threshold.
    pub fn with_threshold_km(mut self, threshold_km: f64) -> Self {
        self.threshold_km = threshold_km;
        self
    }

    /// Enables or disables parallel building.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets a time limit for the build.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Checks that the threshold is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ProximityError::InvalidThreshold`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold_km.is_finite() || self.threshold_km <= 0.0 {
            return Err(ProximityError::InvalidThreshold(self.threshold_km));
        }
        Ok(())
    }

    /// Creates a builder whose deadline, if any, counts from `start`.
    pub fn graph_builder(&self, start: Instant) -> GraphBuilder {
        let builder = GraphBuilder::new(self.threshold_km).with_parallel(self.parallel);
        match self.deadline {
            Some(limit) => builder.with_deadline(start + limit),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.input, PathBuf::from("D1_routes.json"));
        assert_eq!(c.output, PathBuf::from("routes_graph.json"));
        assert_eq!(c.threshold_km, 2.0);
        assert!(!c.parallel);
        assert!(c.deadline.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_invalid_thresholds() {
        for t in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let err = Config::default().with_threshold_km(t).validate();
            assert!(matches!(err, Err(ProximityError::InvalidThreshold(_))));
        }
    }

    #[test]
    fn test_graph_builder_carries_settings() {
        let c = Config::default()
            .with_threshold_km(0.75)
            .with_deadline(Duration::from_secs(60));
        let b = c.graph_builder(Instant::now());
        assert_eq!(b.threshold_km(), 0.75);
    }
}
