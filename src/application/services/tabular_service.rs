use std::sync::Arc;

use crate::application::ports::{ModelGateway, ModelGatewayError};
use crate::application::services::{build_tabular_prompt, extract_records, reconcile, ExtractionError};
use crate::domain::ProcessingMode;
use crate::infrastructure::spreadsheet::{decode_first_sheet, encode_workbook, DecodeError, EncodeError};

/// The tabular pipeline: decode the uploaded workbook, build the prompt,
/// invoke the model, extract and reconcile the reply, and re-encode.
///
/// One instance serves all requests; every call owns its own sheet, prompt,
/// and reply, so concurrent uploads never share state.
pub struct TabularService<G: ModelGateway> {
    gateway: Arc<G>,
    model: String,
}

impl<G: ModelGateway> TabularService<G> {
    pub fn new(gateway: Arc<G>, model: String) -> Self {
        Self { gateway, model }
    }

    pub async fn process(
        &self,
        data: &[u8],
        mode: ProcessingMode,
        instruction: &str,
    ) -> Result<Vec<u8>, TabularPipelineError> {
        let sheet = decode_first_sheet(data)?;
        tracing::debug!(
            rows = sheet.rows.len(),
            columns = sheet.columns.len(),
            "Workbook decoded"
        );
        if sheet.is_empty() {
            tracing::warn!("Workbook contains no data rows");
        }

        let prompt = build_tabular_prompt(&sheet, mode, instruction);
        let reply = self.gateway.generate(&self.model, &prompt).await?;
        tracing::debug!(reply_chars = reply.len(), "Model reply received");

        let extracted = extract_records(&reply)?;
        if extracted.len() != sheet.rows.len() {
            tracing::warn!(
                expected = sheet.rows.len(),
                received = extracted.len(),
                "Model reply row count differs from input; unmatched rows keep empty fields"
            );
        }

        let merged = reconcile(&sheet, &extracted, mode);
        let encoded = encode_workbook(&merged)?;
        tracing::debug!(bytes = encoded.len(), "Workbook encoded");

        Ok(encoded)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TabularPipelineError {
    #[error("spreadsheet decoding: {0}")]
    Decode(#[from] DecodeError),
    #[error("model gateway: {0}")]
    Gateway(#[from] ModelGatewayError),
    #[error("response extraction: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("spreadsheet encoding: {0}")]
    Encode(#[from] EncodeError),
}
