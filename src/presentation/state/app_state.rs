use std::sync::Arc;

use crate::application::ports::{ArtifactStore, ModelGateway};
use crate::application::services::{TabularService, TextService};
use crate::presentation::config::UploadLimits;

pub struct AppState<G, A>
where
    G: ModelGateway,
    A: ArtifactStore,
{
    pub tabular_service: Arc<TabularService<G>>,
    pub text_service: Arc<TextService<G>>,
    pub model_gateway: Arc<G>,
    pub artifact_store: Arc<A>,
    pub limits: UploadLimits,
}

impl<G, A> Clone for AppState<G, A>
where
    G: ModelGateway,
    A: ArtifactStore,
{
    fn clone(&self) -> Self {
        Self {
            tabular_service: Arc::clone(&self.tabular_service),
            text_service: Arc::clone(&self.text_service),
            model_gateway: Arc::clone(&self.model_gateway),
            artifact_store: Arc::clone(&self.artifact_store),
            limits: self.limits.clone(),
        }
    }
}
