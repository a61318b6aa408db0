//! Great-circle distances between points and routes.
//!
//! Provides the haversine kernel, the brute-force route-pair minimum, and a
//! dense route-to-route distance matrix.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, min_route_distance, nearest_point, EARTH_RADIUS_KM};
pub use matrix::RouteDistanceMatrix;
