//! Progress notifications from the graph builder.

/// Receives notifications as the builder completes source routes.
///
/// Must be `Sync` because parallel builds notify from worker threads.
/// Both methods default to doing nothing; `()` is the silent observer.
pub trait ProgressObserver: Sync {
    /// Called after the neighbor list of `route` is complete.
    fn route_processed(&self, _index: usize, _total: usize, _route: &str) {}

    /// Called once after a successful build.
    fn finished(&self, _edge_count: usize) {}
}

impl ProgressObserver for () {}
