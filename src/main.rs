use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use rowmill::application::services::{TabularService, TextService};
use rowmill::infrastructure::llm::OllamaGateway;
use rowmill::infrastructure::observability::{init_tracing, TracingConfig};
use rowmill::infrastructure::storage::LocalArtifactStore;
use rowmill::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    let gateway = Arc::new(OllamaGateway::new(
        &settings.model.base_url,
        settings.model.request_timeout(),
    ));
    let artifact_store = Arc::new(LocalArtifactStore::new(
        settings.storage.downloads_dir.clone(),
    )?);

    let tabular_service = Arc::new(TabularService::new(
        Arc::clone(&gateway),
        settings.model.model.clone(),
    ));
    let text_service = Arc::new(TextService::new(
        Arc::clone(&gateway),
        settings.model.model.clone(),
    ));

    let state = AppState {
        tabular_service,
        text_service,
        model_gateway: gateway,
        artifact_store,
        limits: settings.limits.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
