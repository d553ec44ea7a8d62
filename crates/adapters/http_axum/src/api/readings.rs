//! Read-only projections of the stored document.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use sensorhub_app::ports::{DocumentStore, Entropy};
use sensorhub_domain::document::{CurrentReadings, HistoryLog};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the current endpoint.
pub enum CurrentResponse {
    Ok(Json<CurrentReadings>),
}

impl IntoResponse for CurrentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the history endpoint.
pub enum HistoryResponse {
    Ok(Json<HistoryLog>),
}

impl IntoResponse for HistoryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /current`
pub async fn current<S, E>(
    State(state): State<AppState<S, E>>,
) -> Result<CurrentResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
    E: Entropy + 'static,
{
    let document = state.engine.load().await?;
    Ok(CurrentResponse::Ok(Json(document.current())))
}

/// `GET /history`
pub async fn history<S, E>(
    State(state): State<AppState<S, E>>,
) -> Result<HistoryResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
    E: Entropy + 'static,
{
    let document = state.engine.load().await?;
    Ok(HistoryResponse::Ok(Json(document.history())))
}
