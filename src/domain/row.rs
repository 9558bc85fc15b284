use serde_json::Value;

/// One decoded spreadsheet row: column name to cell value, in column order.
///
/// serde_json's `preserve_order` feature keeps key order stable, so a row
/// serializes with its columns in the order the decoder inserted them. Cell
/// values are strings, numbers, or booleans; empty cells hold `""` rather
/// than a missing key, so every row carries every column.
pub type RowRecord = serde_json::Map<String, Value>;

/// The decoded first sheet of an uploaded workbook.
///
/// `columns` is the authoritative column order for encoding; each entry of
/// `rows` has exactly these keys. Row order is the upload's row order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub columns: Vec<String>,
    pub rows: Vec<RowRecord>,
}

impl Sheet {
    pub fn new(columns: Vec<String>, rows: Vec<RowRecord>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
