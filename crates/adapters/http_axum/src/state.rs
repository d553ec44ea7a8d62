//! Shared application state for axum handlers.

use std::sync::Arc;

use sensorhub_app::ports::{DocumentStore, Entropy};
use sensorhub_app::simulation_engine::SimulationEngine;

/// Application state shared across all axum handlers.
///
/// Generic over the store and entropy types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<S, E> {
    /// Simulation engine, also used to read the document.
    pub engine: Arc<SimulationEngine<S, E>>,
}

impl<S, E> Clone for AppState<S, E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<S, E> AppState<S, E>
where
    S: DocumentStore + Send + Sync + 'static,
    E: Entropy + 'static,
{
    /// Create a new application state owning the engine.
    pub fn new(engine: SimulationEngine<S, E>) -> Self {
        Self::from_arc(Arc::new(engine))
    }

    /// Create a new application state from a pre-wrapped engine.
    ///
    /// Use this when the engine is shared with the background ticker.
    pub fn from_arc(engine: Arc<SimulationEngine<S, E>>) -> Self {
        Self { engine }
    }
}
