//! On-demand simulation tick.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use sensorhub_app::ports::{DocumentStore, Entropy};
use sensorhub_domain::document::SensorDocument;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the generate endpoint.
pub enum GenerateResponse {
    Ok(Json<SensorDocument>),
}

impl IntoResponse for GenerateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /generate`
pub async fn generate<S, E>(
    State(state): State<AppState<S, E>>,
) -> Result<GenerateResponse, ApiError>
where
    S: DocumentStore + Send + Sync + 'static,
    E: Entropy + 'static,
{
    let document = state.engine.tick().await?;
    Ok(GenerateResponse::Ok(Json(document)))
}
