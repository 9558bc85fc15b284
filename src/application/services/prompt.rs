use crate::domain::{ProcessingMode, Sheet};

/// Instruction block for structured mode. The key names and the severity
/// vocabulary here must stay in sync with the reconciler's added columns.
const STRUCTURED_INSTRUCTIONS: &str = "\
You are a data-cleaning assistant for customer problem reports.
You will be given a JSON array of rows. Each row carries the original spreadsheet columns (for example \"Title\" and \"Problem\").
For each row produce an object with exactly these keys: \"Module\", \"Summarized Problem\", \"Severity\".
- Remove all tokens inside square brackets [] before summarizing.
- Translate non-English text to English.
- \"Summarized Problem\" must be one concise English sentence merging the row's title and problem description.
- \"Severity\" must be one of: Critical, High, Medium, Low.

Rules:
1) Return ONLY a single valid JSON array of objects, in the same order and of the same length as the input.
2) Each object must contain exactly the keys \"Module\", \"Summarized Problem\", \"Severity\".
3) No commentary, no markdown, no extra fields.";

/// Build the model prompt for a decoded sheet.
///
/// Deterministic: the same (rows, mode, instruction) always yields the same
/// bytes. Row serialization preserves row order and column order.
pub fn build_tabular_prompt(sheet: &Sheet, mode: ProcessingMode, instruction: &str) -> String {
    let rows_json = serialize_rows(sheet);
    match mode {
        ProcessingMode::Structured => format!(
            "{STRUCTURED_INSTRUCTIONS}\n\nInput:\n{rows_json}\n\nReturn only the JSON array."
        ),
        ProcessingMode::Freeform => join_instruction(instruction, &rows_json),
    }
}

/// Build the model prompt for a plain-text document.
///
/// Freeform prepends the caller's instruction; structured mode has no
/// meaning for unstructured text, so the text passes through unchanged.
pub fn build_text_prompt(text: &str, mode: ProcessingMode, instruction: &str) -> String {
    match mode {
        ProcessingMode::Structured => text.to_string(),
        ProcessingMode::Freeform => join_instruction(instruction, text),
    }
}

fn serialize_rows(sheet: &Sheet) -> String {
    serde_json::to_string_pretty(&sheet.rows).expect("row records serialize to JSON")
}

fn join_instruction(instruction: &str, body: &str) -> String {
    let instruction = instruction.trim();
    if instruction.is_empty() {
        body.to_string()
    } else {
        format!("{instruction}\n\n{body}")
    }
}
