use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook, XlsxError};
use serde_json::Value;

use crate::domain::Sheet;

const SHEET_NAME: &str = "Data";

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("workbook serialization failed: {0}")]
    Workbook(#[from] XlsxError),
}

/// Serialize a reconciled sheet to a single-sheet workbook.
///
/// Header row from `sheet.columns`, one data row per record, original order.
/// The creation timestamp is pinned so identical input produces identical
/// bytes.
pub fn encode_workbook(sheet: &Sheet) -> Result<Vec<u8>, EncodeError> {
    let mut workbook = Workbook::new();

    let creation = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&creation);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in sheet.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }

    for (row_index, record) in sheet.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        for (col_index, column) in sheet.columns.iter().enumerate() {
            let col = col_index as u16;
            match record.get(column) {
                None | Some(Value::Null) => {}
                Some(Value::String(s)) if s.is_empty() => {}
                Some(Value::String(s)) => {
                    worksheet.write_string(row, col, s)?;
                }
                Some(Value::Number(n)) => {
                    worksheet.write_number(row, col, n.as_f64().unwrap_or(0.0))?;
                }
                Some(Value::Bool(b)) => {
                    worksheet.write_boolean(row, col, *b)?;
                }
                Some(other) => {
                    worksheet.write_string(row, col, other.to_string())?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
