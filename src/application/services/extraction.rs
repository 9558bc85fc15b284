use serde_json::Value;

/// Isolate the array-of-objects payload embedded in a model reply.
///
/// Models wrap answers in prose, markdown fences, or trailing commentary, so
/// this is a tolerant two-phase scan: take the substring from the first `[`
/// to the last `]`, then parse that substring strictly. Length is not checked
/// against the input row count here; the reconciler handles shortfall
/// per-index.
pub fn extract_records(reply: &str) -> Result<Vec<Value>, ExtractionError> {
    let start = reply.find('[').ok_or(ExtractionError::NoArrayFound)?;
    let end = reply
        .rfind(']')
        .filter(|&end| end > start)
        .ok_or(ExtractionError::NoArrayFound)?;

    let candidate = &reply[start..=end];
    serde_json::from_str(candidate).map_err(|e| ExtractionError::InvalidArray(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no JSON array found in model reply")]
    NoArrayFound,
    #[error("embedded payload is not a valid JSON array: {0}")]
    InvalidArray(String),
}
