//! Clustering Backend Server
//!
//! Routes, middleware, and startup for the school clustering API.
//!
//! ## Submodules
//!
//! - [`handlers`] — Request handlers for the clustering endpoint and dataset
//! - [`service`] — Startup-injected configuration and the clustering entry point

pub mod handlers;
mod service;

pub use service::Service;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use anyhow::Context;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../static/index.html"))
}

#[rustfmt::skip]
pub async fn run() -> anyhow::Result<()> {
    let service = web::Data::new(Service::from_env()?);
    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8888".to_string());
    log::info!("starting clustering server on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(service.clone())
            .route("/", web::get().to(index))
            .route("/health", web::get().to(health))
            .route("/static/data/school_locations.csv", web::get().to(handlers::dataset))
            .service(
                web::scope("/api")
                    .route("/cluster-schools", web::post().to(handlers::cluster_schools)),
            )
    })
    .workers(6)
    .bind(&bind)
    .with_context(|| format!("bind {}", bind))?
    .run()
    .await?;
    Ok(())
}
