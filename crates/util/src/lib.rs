//! Core type aliases, constants, and runtime utilities for the geocluster
//! backend.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the geocluster workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Distances, squared distances, and inertia values.
pub type Energy = f64;
/// A 2D coordinate as (latitude, longitude).
pub type Coordinates = [Energy; 2];

// ============================================================================
// K-MEANS CLUSTERING
// Seeding, iteration, and restart parameters for the clustering engine.
// ============================================================================
/// Cluster count when the request omits `k`.
pub const KMEANS_DEFAULT_K: usize = 4;
/// Independent k-means++ restarts per clustering call.
pub const KMEANS_RESTARTS: usize = 10;
/// Lloyd's algorithm iteration cap per restart.
pub const KMEANS_TRAINING_ITERATIONS: usize = 300;
/// Base seed for deterministic clustering. Restart r draws from seed + r.
pub const KMEANS_SEED: u64 = 42;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
