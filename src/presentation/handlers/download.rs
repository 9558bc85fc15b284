use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{ArtifactStore, ArtifactStoreError, ModelGateway};
use crate::presentation::state::AppState;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn download_handler<G, A>(
    State(state): State<AppState<G, A>>,
    Path(token): Path<String>,
) -> Response
where
    G: ModelGateway + 'static,
    A: ArtifactStore + 'static,
{
    match state.artifact_store.get(&token).await {
        Ok(bytes) => {
            tracing::debug!(token = %token, bytes = bytes.len(), "Serving artifact");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, XLSX_MIME.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", token),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(ArtifactStoreError::NotFound(_)) => {
            tracing::warn!(token = %token, "Artifact not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("No such download: {}", token),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Artifact fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Download failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
