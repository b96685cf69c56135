use super::Service;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use gcl_clustering::ClusterError;
use gcl_clustering::Point;
use gcl_dto::ClusterRequest;
use gcl_dto::ClusterResponse;
use gcl_dto::Clusters;
use gcl_dto::ErrorResponse;

/// `POST /api/cluster-schools`
///
/// Partitions the submitted schools into k groups and echoes the input back
/// alongside the partition. Empty input and unusable k are client errors;
/// anything the computation itself cannot handle is a server error.
pub async fn cluster_schools(
    service: web::Data<Service>,
    req: web::Json<ClusterRequest>,
) -> impl Responder {
    let ClusterRequest { k, schools } = req.into_inner();
    if schools.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("No school data provided"));
    }
    let points = schools
        .iter()
        .map(|s| Point::new(s.latitude, s.longitude))
        .collect::<Vec<Point>>();
    match service.cluster(&points, k) {
        Ok(clustering) => {
            log::debug!(
                "clustered {} schools into {} groups in {} iterations",
                schools.len(),
                k,
                clustering.iterations
            );
            let clusters = Clusters {
                assignments: clustering.assignments,
                centers: clustering.centers.iter().map(Point::coordinates).collect(),
                inertia: clustering.inertia,
                iterations: clustering.iterations,
            };
            HttpResponse::Ok().json(ClusterResponse::new(clusters, schools))
        }
        Err(e @ ClusterError::InvalidInput(_)) => {
            log::warn!("rejected clustering request: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string()))
        }
        Err(e) => {
            log::error!("clustering failed for {} schools, k = {}: {}", schools.len(), k, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()))
        }
    }
}

/// `GET /static/data/school_locations.csv`
///
/// Serves the static school dataset used by the earlier variant of the
/// clustering endpoint. 404 when no dataset is configured or readable.
pub async fn dataset(service: web::Data<Service>) -> impl Responder {
    match service.dataset() {
        None => HttpResponse::NotFound().json(ErrorResponse::new("no dataset configured")),
        Some(path) => match std::fs::read_to_string(path) {
            Ok(csv) => HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .body(csv),
            Err(e) => {
                log::error!("failed to read dataset {}: {}", path.display(), e);
                HttpResponse::NotFound().json(ErrorResponse::new("dataset unavailable"))
            }
        },
    }
}
