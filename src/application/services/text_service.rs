use std::sync::Arc;

use crate::application::ports::{ModelGateway, ModelGatewayError};
use crate::application::services::build_text_prompt;
use crate::domain::ProcessingMode;

/// The single-stage pipeline for non-tabular documents: build the prompt,
/// invoke the model, hand the raw reply back untouched.
pub struct TextService<G: ModelGateway> {
    gateway: Arc<G>,
    model: String,
}

pub struct TextOutcome {
    pub result: String,
    pub input_length: usize,
}

impl<G: ModelGateway> TextService<G> {
    pub fn new(gateway: Arc<G>, model: String) -> Self {
        Self { gateway, model }
    }

    pub async fn process(
        &self,
        text: &str,
        mode: ProcessingMode,
        instruction: &str,
    ) -> Result<TextOutcome, ModelGatewayError> {
        let prompt = build_text_prompt(text, mode, instruction);
        let result = self.gateway.generate(&self.model, &prompt).await?;

        Ok(TextOutcome {
            result,
            input_length: text.len(),
        })
    }
}
