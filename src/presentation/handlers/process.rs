use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{ArtifactStore, ModelGateway, ModelGatewayError};
use crate::application::services::TabularPipelineError;
use crate::domain::{Document, DocumentFormat, ProcessingMode};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TextProcessResponse {
    pub success: bool,
    pub result: String,
    pub input_length: usize,
}

#[derive(Serialize)]
pub struct TabularProcessResponse {
    pub success: bool,
    pub download_url: String,
    pub filename: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_handler<G, A>(
    State(state): State<AppState<G, A>>,
    mut multipart: Multipart,
) -> Response
where
    G: ModelGateway + 'static,
    A: ArtifactStore + 'static,
{
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut raw_text: Option<String> = None;
    let mut mode = ProcessingMode::Freeform;
    let mut instruction = String::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let data = match field.bytes().await {
                    Ok(data) => data,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read file: {}", e),
                        );
                    }
                };
                upload = Some((filename, data.to_vec()));
            }
            "text" => match field.text().await {
                Ok(text) => raw_text = Some(text),
                Err(e) => {
                    return error_response(
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read text field: {}", e),
                    );
                }
            },
            "processing_mode" => {
                let value = field.text().await.unwrap_or_default();
                if value.trim().is_empty() {
                    continue;
                }
                mode = match ProcessingMode::parse(&value) {
                    Some(mode) => mode,
                    None => {
                        tracing::warn!(mode = %value, "Unknown processing mode");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Unknown processing mode: {}", value),
                        );
                    }
                };
            }
            "custom_instruction" => {
                instruction = field.text().await.unwrap_or_default();
            }
            _ => {}
        }
    }

    tracing::debug!(
        mode = %mode,
        instruction = %sanitize_prompt(&instruction),
        "Process request received"
    );

    if let Some((filename, data)) = upload {
        if data.len() > state.limits.max_upload_bytes {
            tracing::warn!(bytes = data.len(), "Upload exceeds size ceiling");
            return error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!(
                    "File exceeds the {} byte upload limit",
                    state.limits.max_upload_bytes
                ),
            );
        }

        let Some(format) = DocumentFormat::from_filename(&filename) else {
            tracing::warn!(filename = %filename, "Unsupported file extension");
            return error_response(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Unsupported file type: {}", filename),
            );
        };

        let document = Document::new(filename, format, data.len() as u64);
        tracing::debug!(
            filename = %document.filename,
            format = document.format.as_str(),
            bytes = document.size_bytes,
            "Processing upload"
        );

        match document.format {
            DocumentFormat::Tabular => {
                run_tabular_pipeline(&state, &document.filename, &data, mode, &instruction).await
            }
            DocumentFormat::Text => {
                let text = String::from_utf8_lossy(&data).into_owned();
                run_text_pipeline(&state, &text, mode, &instruction).await
            }
        }
    } else if let Some(text) = raw_text {
        run_text_pipeline(&state, &text, mode, &instruction).await
    } else {
        error_response(
            StatusCode::BAD_REQUEST,
            "No file or text provided".to_string(),
        )
    }
}

async fn run_tabular_pipeline<G, A>(
    state: &AppState<G, A>,
    filename: &str,
    data: &[u8],
    mode: ProcessingMode,
    instruction: &str,
) -> Response
where
    G: ModelGateway,
    A: ArtifactStore,
{
    let encoded = match state.tabular_service.process(data, mode, instruction).await {
        Ok(encoded) => encoded,
        Err(e) => return tabular_error_response(e),
    };

    let token = artifact_token(filename);
    if let Err(e) = state.artifact_store.put(&token, encoded).await {
        tracing::error!(error = %e, "Failed to stage processed workbook");
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to store processed file".to_string(),
        );
    }

    tracing::info!(token = %token, "Workbook processed");
    (
        StatusCode::OK,
        Json(TabularProcessResponse {
            success: true,
            download_url: format!("/downloads/{}", token),
            filename: token,
        }),
    )
        .into_response()
}

async fn run_text_pipeline<G, A>(
    state: &AppState<G, A>,
    text: &str,
    mode: ProcessingMode,
    instruction: &str,
) -> Response
where
    G: ModelGateway,
    A: ArtifactStore,
{
    match state.text_service.process(text, mode, instruction).await {
        Ok(outcome) => {
            tracing::info!(input_length = outcome.input_length, "Text processed");
            (
                StatusCode::OK,
                Json(TextProcessResponse {
                    success: true,
                    result: outcome.result,
                    input_length: outcome.input_length,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Text processing failed");
            error_response(gateway_status(&e), e.to_string())
        }
    }
}

fn tabular_error_response(error: TabularPipelineError) -> Response {
    let status = match &error {
        TabularPipelineError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
        TabularPipelineError::Gateway(e) => gateway_status(e),
        TabularPipelineError::Extraction(_) => StatusCode::BAD_GATEWAY,
        TabularPipelineError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::error!(error = %error, "Tabular processing failed");
    error_response(status, error.to_string())
}

fn gateway_status(error: &ModelGatewayError) -> StatusCode {
    match error {
        ModelGatewayError::ServiceUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

/// Download token for a processed workbook: unique id plus the sanitized
/// original name, always with an xlsx extension since that is what the
/// encoder emits.
fn artifact_token(filename: &str) -> String {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(filename);
    format!("processed-{}-{}.xlsx", Uuid::new_v4(), sanitize_filename(stem))
}

/// Keep alphanumerics, dot, dash, underscore; everything else becomes an
/// underscore.
fn sanitize_filename(input: &str) -> String {
    let mut out: String = input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    while out.contains("__") {
        out = out.replace("__", "_");
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}
