//! K-means clustering over 2D geographic coordinates.
//!
//! Partitions a set of (latitude, longitude) points into k groups using
//! Lloyd's algorithm with k-means++ seeding. Each clustering call runs
//! several independent restarts in parallel and keeps the partition with
//! the lowest inertia; restart RNGs are seeded deterministically so the
//! same input always produces the same output.
//!
//! ## Core Types
//!
//! - [`KMeans`] — Configured engine: cluster count, restarts, iteration cap, seed
//! - [`Clustering`] — A partition: assignments, centers, inertia, iterations
//! - [`Point`] — A 2D point with squared Euclidean distance
//! - [`ClusterError`] — Closed error taxonomy (invalid input vs. computation failure)
mod error;
mod kmeans;
mod point;
mod seeding;

pub use error::*;
pub use kmeans::*;
pub use point::*;
pub use seeding::*;
