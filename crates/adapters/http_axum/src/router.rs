//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use sensorhub_app::ports::{DocumentStore, Entropy};

use crate::state::AppState;

/// Text served at `/`.
pub const BANNER: &str =
    "Server is running. Routes: /current (current readings), /history (history), /generate (refresh)";

/// Build the top-level axum [`Router`].
///
/// Serves the banner at `/` and merges the JSON API routes. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem. Unknown paths fall through to axum's 404.
pub fn build<S, E>(state: AppState<S, E>) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
    E: Entropy + 'static,
{
    Router::new()
        .route("/", get(banner))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn banner() -> &'static str {
    BANNER
}
