//! # sensorhubd: sensorhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`sensorhub.toml` plus env overrides)
//! - Initialise `tracing`
//! - Construct the JSON file store and the entropy source (adapters)
//! - Construct the simulation engine and spawn its background ticker
//! - Build the axum router and serve it until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use sensorhub_adapter_http_axum::router;
use sensorhub_adapter_http_axum::state::AppState;
use sensorhub_adapter_storage_json::JsonFileStore;
use sensorhub_app::entropy::RngEntropy;
use sensorhub_app::simulation_engine::SimulationEngine;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Storage
    let store = JsonFileStore::new(&config.storage.path);

    // Entropy
    let entropy = match config.simulation.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded entropy");
            RngEntropy::seeded(seed)
        }
        None => RngEntropy::from_os_rng(),
    };

    // Simulation
    let simulation = config.simulation();
    let engine = Arc::new(SimulationEngine::new(store, entropy, simulation));
    tracing::info!(
        path = %config.storage.path,
        tick_interval_secs = simulation.tick_interval.as_secs(),
        "simulation engine ready"
    );
    let ticker = tokio::spawn(Arc::clone(&engine).run());

    // HTTP
    let app = router::build(AppState::from_arc(engine));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("sensorhubd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    ticker.abort();
    tracing::info!("sensorhubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
