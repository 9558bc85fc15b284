use async_trait::async_trait;

use crate::application::ports::{ModelGateway, ModelGatewayError};

/// Mock gateway for tests: returns a configured reply, or refuses every
/// request when constructed unreachable.
pub struct MockModelGateway {
    reply: String,
    reachable: bool,
}

impl MockModelGateway {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            reachable: true,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: String::new(),
            reachable: false,
        }
    }
}

#[async_trait]
impl ModelGateway for MockModelGateway {
    async fn generate(&self, _model: &str, _prompt: &str) -> Result<String, ModelGatewayError> {
        if !self.reachable {
            return Err(ModelGatewayError::ServiceUnreachable(
                "connection refused".to_string(),
            ));
        }
        Ok(self.reply.clone())
    }

    async fn is_reachable(&self) -> bool {
        self.reachable
    }
}
