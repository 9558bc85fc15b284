use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{ArtifactStore, ModelGateway};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_service: String,
}

/// Liveness probe for external monitoring; reports whether the model
/// service currently answers. The pipeline itself never consults this.
pub async fn health_handler<G, A>(State(state): State<AppState<G, A>>) -> impl IntoResponse
where
    G: ModelGateway + 'static,
    A: ArtifactStore + 'static,
{
    let model_service = if state.model_gateway.is_reachable().await {
        "reachable"
    } else {
        "unreachable"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            model_service: model_service.to_string(),
        }),
    )
}
