use async_trait::async_trait;

/// The sole network seam to the generative-model service.
///
/// One prompt in, one complete reply out; no streaming, no retries. Retry
/// policy, if any, belongs to the caller.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ModelGatewayError>;

    /// Liveness probe for monitoring; never consulted by the pipeline.
    async fn is_reachable(&self) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelGatewayError {
    #[error("model service unreachable: {0}")]
    ServiceUnreachable(String),
    #[error("model service returned status {status}: {body}")]
    ServiceStatus { status: u16, body: String },
    #[error("malformed service response: {0}")]
    MalformedResponse(String),
}
