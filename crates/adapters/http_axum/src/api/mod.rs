//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod generate;
#[allow(clippy::missing_errors_doc)]
pub mod readings;

use axum::Router;
use axum::routing::{get, post};

use sensorhub_app::ports::{DocumentStore, Entropy};

use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<S, E>() -> Router<AppState<S, E>>
where
    S: DocumentStore + Send + Sync + 'static,
    E: Entropy + 'static,
{
    Router::new()
        .route("/current", get(readings::current::<S, E>))
        .route("/history", get(readings::history::<S, E>))
        .route("/generate", post(generate::generate::<S, E>))
}
