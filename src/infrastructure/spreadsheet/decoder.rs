use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use serde_json::Value;

use crate::domain::{RowRecord, Sheet};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unreadable workbook: {0}")]
    UnreadableWorkbook(String),
    #[error("workbook has no sheets")]
    NoSheets,
}

/// Decode the first sheet of an uploaded workbook into ordered row records.
///
/// The first row is the header; blank header cells get positional
/// placeholder names. Data rows are padded to the full column list with
/// empty strings so downstream indexed merging never sees a gap. Rows with
/// no content at all are skipped. An empty first sheet decodes to an empty
/// `Sheet`.
pub fn decode_first_sheet(data: &[u8]) -> Result<Sheet, DecodeError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
        .map_err(|e| DecodeError::UnreadableWorkbook(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DecodeError::NoSheets)?
        .map_err(|e| DecodeError::UnreadableWorkbook(e.to_string()))?;

    let mut row_iter = range.rows();
    let Some(header) = row_iter.next() else {
        return Ok(Sheet::default());
    };

    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(index, cell)| header_name(cell, index))
        .collect();

    let mut rows = Vec::new();
    for row in row_iter {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let mut record = RowRecord::new();
        for (index, column) in columns.iter().enumerate() {
            let value = row
                .get(index)
                .map(cell_to_value)
                .unwrap_or_else(|| Value::String(String::new()));
            record.insert(column.clone(), value);
        }
        rows.push(record);
    }

    Ok(Sheet::new(columns, rows))
}

fn header_name(cell: &Data, index: usize) -> String {
    match cell {
        Data::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Data::Float(f) => trim_float(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        _ => format!("Column{}", index + 1),
    }
}

fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::String(String::new()),
        Data::String(s) => Value::String(s.clone()),
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.to_string())),
        Data::Int(i) => Value::from(*i),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => serde_json::Number::from_f64(dt.as_f64())
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(String::new())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(_) => Value::String(String::new()),
    }
}

fn trim_float(f: f64) -> String {
    if f.fract() == 0.0 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}
