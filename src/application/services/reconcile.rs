use serde_json::Value;

use crate::domain::{ProcessingMode, RowRecord, Sheet};

/// Columns appended in structured mode, in output order, with the reply keys
/// accepted for each. Models occasionally drop the space in a two-word key,
/// so "Summarized Problem" also accepts "SummarizedProblem".
const STRUCTURED_ADDED: &[(&str, &[&str])] = &[
    ("Module", &["Module"]),
    ("Summarized Problem", &["Summarized Problem", "SummarizedProblem"]),
    ("Severity", &["Severity"]),
];

/// Merge model-derived fields onto the original rows by position.
///
/// Index `i` of the extracted payload belongs to row `i`; the model is not
/// trusted to echo identifying fields, so no key-based matching is
/// attempted. Original fields are never overwritten. A missing or non-object
/// entry, or a recognized field of the wrong shape, degrades to empty added
/// fields for that row; the batch always survives. Output column order is
/// the original columns followed by the added columns.
pub fn reconcile(sheet: &Sheet, extracted: &[Value], mode: ProcessingMode) -> Sheet {
    let added = added_columns(sheet, extracted, mode);

    let mut rows = Vec::with_capacity(sheet.rows.len());
    for (index, original) in sheet.rows.iter().enumerate() {
        let record = extracted.get(index).and_then(Value::as_object);

        let mut row = original.clone();
        for column in &added {
            if row.contains_key(column) {
                continue;
            }
            let value = match mode {
                ProcessingMode::Structured => structured_field(record, column),
                ProcessingMode::Freeform => record
                    .and_then(|r| r.get(column))
                    .cloned()
                    .unwrap_or_else(empty_cell),
            };
            row.insert(column.clone(), value);
        }
        rows.push(row);
    }

    let mut columns = sheet.columns.clone();
    let appended: Vec<String> = added
        .iter()
        .filter(|column| !columns.contains(*column))
        .cloned()
        .collect();
    columns.extend(appended);

    Sheet::new(columns, rows)
}

fn added_columns(sheet: &Sheet, extracted: &[Value], mode: ProcessingMode) -> Vec<String> {
    match mode {
        ProcessingMode::Structured => STRUCTURED_ADDED
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect(),
        // No declared schema in freeform mode: append every reply key that
        // is not an original column, in first-seen order across the reply.
        ProcessingMode::Freeform => {
            let mut added = Vec::new();
            for record in extracted.iter().filter_map(Value::as_object) {
                for key in record.keys() {
                    if !sheet.columns.contains(key) && !added.contains(key) {
                        added.push(key.clone());
                    }
                }
            }
            added
        }
    }
}

/// Structured mode accepts only JSON strings for its fixed fields; anything
/// absent or of another shape defaults to the empty string.
fn structured_field(record: Option<&RowRecord>, column: &str) -> Value {
    let Some(record) = record else {
        return empty_cell();
    };

    let aliases = STRUCTURED_ADDED
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, aliases)| *aliases)
        .unwrap_or_default();

    aliases
        .iter()
        .find_map(|alias| record.get(*alias))
        .and_then(Value::as_str)
        .map(|s| Value::String(s.to_string()))
        .unwrap_or_else(empty_cell)
}

fn empty_cell() -> Value {
    Value::String(String::new())
}
