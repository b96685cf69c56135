use anyhow::Context;
use gcl_clustering::ClusterError;
use gcl_clustering::Clustering;
use gcl_clustering::KMeans;
use gcl_clustering::Point;
use std::path::Path;
use std::path::PathBuf;

/// Startup-injected configuration for the clustering service.
///
/// Built once from the environment and shared with handlers through
/// `web::Data`, so nothing reaches for ambient globals at request time.
///
/// Environment variables (all optional):
/// - `KMEANS_SEED` — base seed for deterministic clustering
/// - `KMEANS_RESTARTS` — independent restarts per request
/// - `KMEANS_ITERATIONS` — Lloyd iteration cap per restart
/// - `SCHOOL_DATA` — path to the static school dataset CSV
pub struct Service {
    seed: u64,
    restarts: usize,
    iterations: usize,
    dataset: Option<PathBuf>,
}

impl Default for Service {
    fn default() -> Self {
        Self {
            seed: gcl_core::KMEANS_SEED,
            restarts: gcl_core::KMEANS_RESTARTS,
            iterations: gcl_core::KMEANS_TRAINING_ITERATIONS,
            dataset: None,
        }
    }
}

impl Service {
    pub fn from_env() -> anyhow::Result<Self> {
        let mut service = Self::default();
        if let Ok(seed) = std::env::var("KMEANS_SEED") {
            service.seed = seed.parse().context("KMEANS_SEED must be an integer")?;
        }
        if let Ok(restarts) = std::env::var("KMEANS_RESTARTS") {
            service.restarts = restarts
                .parse()
                .context("KMEANS_RESTARTS must be an integer")?;
        }
        if let Ok(iterations) = std::env::var("KMEANS_ITERATIONS") {
            service.iterations = iterations
                .parse()
                .context("KMEANS_ITERATIONS must be an integer")?;
        }
        service.dataset = std::env::var("SCHOOL_DATA").ok().map(PathBuf::from);
        Ok(service)
    }

    /// Partitions `points` into `k` groups with this service's parameters.
    pub fn cluster(&self, points: &[Point], k: usize) -> Result<Clustering, ClusterError> {
        KMeans::new(k)
            .with_seed(self.seed)
            .with_restarts(self.restarts)
            .with_iterations(self.iterations)
            .cluster(points)
    }

    /// Path of the static school dataset, when configured.
    pub fn dataset(&self) -> Option<&Path> {
        self.dataset.as_deref()
    }
}
