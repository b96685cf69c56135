//! Clustering Backend Binary
//!
//! Serves the school clustering API on BIND_ADDR (default 0.0.0.0:8888).

#[tokio::main]
async fn main() {
    gcl_core::log();
    gcl_core::kys();
    gcl_server::run().await.unwrap();
}
