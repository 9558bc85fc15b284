use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ArtifactStore, ModelGateway};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{download_handler, health_handler, process_handler};
use crate::presentation::state::AppState;

/// Slack on top of the upload ceiling for multipart framing and the other
/// form fields, so the handler's own size check is the one that fires.
const BODY_LIMIT_SLACK: usize = 64 * 1024;

pub fn create_router<G, A>(state: AppState<G, A>) -> Router
where
    G: ModelGateway + 'static,
    A: ArtifactStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.limits.max_upload_bytes + BODY_LIMIT_SLACK;

    Router::new()
        .route("/api/health", get(health_handler::<G, A>))
        .route("/api/process", post(process_handler::<G, A>))
        .route("/downloads/{token}", get(download_handler::<G, A>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
