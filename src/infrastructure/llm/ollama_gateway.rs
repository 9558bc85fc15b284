use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ModelGateway, ModelGatewayError};

/// HTTP client for a local Ollama instance.
///
/// Requests are non-streaming; the configured timeout must leave room for
/// model inference, which routinely takes far longer than a typical HTTP
/// request.
pub struct OllamaGateway {
    base_url: String,
    client: reqwest::Client,
}

impl OllamaGateway {
    pub fn new(base_url: &str, request_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

/// Request body for `/api/generate`.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response body from `/api/generate`.
#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[async_trait]
impl ModelGateway for OllamaGateway {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ModelGatewayError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelGatewayError::ServiceStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ModelGatewayError::MalformedResponse(e.to_string()))?;

        Ok(parsed.response)
    }

    async fn is_reachable(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

fn classify_transport_error(error: reqwest::Error) -> ModelGatewayError {
    if error.is_connect() || error.is_timeout() {
        ModelGatewayError::ServiceUnreachable(error.to_string())
    } else {
        ModelGatewayError::MalformedResponse(error.to_string())
    }
}
