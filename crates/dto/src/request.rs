use gcl_core::Energy;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Body of `POST /api/cluster-schools`.
#[derive(Debug, Deserialize)]
pub struct ClusterRequest {
    /// Desired cluster count.
    #[serde(default = "default_k")]
    pub k: usize,
    pub schools: Vec<School>,
}

fn default_k() -> usize {
    gcl_core::KMEANS_DEFAULT_K
}

/// A school location.
///
/// Only the coordinates participate in clustering; every other field (name,
/// type, whatever the caller sends) is captured by the flattened map and
/// echoed back unchanged in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub latitude: Energy,
    pub longitude: Energy,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_defaults_when_absent() {
        let req: ClusterRequest = serde_json::from_str(
            r#"{"schools": [{"latitude": 59.3, "longitude": 18.0}]}"#,
        )
        .unwrap();
        assert_eq!(req.k, gcl_core::KMEANS_DEFAULT_K);
        assert_eq!(req.schools.len(), 1);
    }

    #[test]
    fn extra_fields_survive_the_round_trip() {
        let json = r#"{"latitude":59.3293,"longitude":18.0686,"name":"Kungsholmens gymnasium","type":"Gymnasieskola"}"#;
        let school: School = serde_json::from_str(json).unwrap();
        assert_eq!(school.extra.get("name").unwrap(), "Kungsholmens gymnasium");
        let back: Value = serde_json::to_value(&school).unwrap();
        let orig: Value = serde_json::from_str(json).unwrap();
        assert_eq!(back, orig);
    }
}
