use super::School;
use gcl_core::Coordinates;
use gcl_core::Energy;
use serde::Deserialize;
use serde::Serialize;

/// Successful body of `POST /api/cluster-schools`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClusterResponse {
    pub success: bool,
    pub clusters: Clusters,
    /// The input array, unchanged and in input order.
    pub schools: Vec<School>,
}

/// The partition produced by the clustering engine.
#[derive(Debug, Serialize, Deserialize)]
pub struct Clusters {
    pub assignments: Vec<usize>,
    pub centers: Vec<Coordinates>,
    pub inertia: Energy,
    pub iterations: usize,
}

/// Error envelope for 4xx/5xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ClusterResponse {
    pub fn new(clusters: Clusters, schools: Vec<School>) -> Self {
        Self {
            success: true,
            clusters,
            schools,
        }
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
