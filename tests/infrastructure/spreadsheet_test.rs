use serde_json::json;

use rowmill::domain::{RowRecord, Sheet};
use rowmill::infrastructure::spreadsheet::{decode_first_sheet, encode_workbook, DecodeError};

fn sample_sheet() -> Sheet {
    let mut first = RowRecord::new();
    first.insert("Name".to_string(), json!("Alice"));
    first.insert("Score".to_string(), json!(4.5));
    first.insert("Active".to_string(), json!(true));

    let mut second = RowRecord::new();
    second.insert("Name".to_string(), json!("Bob"));
    second.insert("Score".to_string(), json!(3.0));
    second.insert("Active".to_string(), json!(false));

    Sheet::new(
        vec!["Name".to_string(), "Score".to_string(), "Active".to_string()],
        vec![first, second],
    )
}

#[test]
fn given_simple_cells_when_round_tripping_then_values_survive() {
    let sheet = sample_sheet();

    let encoded = encode_workbook(&sheet).unwrap();
    let decoded = decode_first_sheet(&encoded).unwrap();

    assert_eq!(decoded.columns, sheet.columns);
    assert_eq!(decoded.rows.len(), 2);
    assert_eq!(decoded.rows[0]["Name"], json!("Alice"));
    assert_eq!(decoded.rows[0]["Score"], json!(4.5));
    assert_eq!(decoded.rows[0]["Active"], json!(true));
    assert_eq!(decoded.rows[1]["Name"], json!("Bob"));
    assert_eq!(decoded.rows[1]["Score"], json!(3.0));
    assert_eq!(decoded.rows[1]["Active"], json!(false));
}

#[test]
fn given_identical_input_when_encoding_twice_then_bytes_are_identical() {
    let sheet = sample_sheet();

    let first = encode_workbook(&sheet).unwrap();
    let second = encode_workbook(&sheet).unwrap();

    assert_eq!(first, second);
}

#[test]
fn given_empty_cells_when_round_tripping_then_they_come_back_as_empty_strings() {
    let mut row = RowRecord::new();
    row.insert("Name".to_string(), json!("Carol"));
    row.insert("Note".to_string(), json!(""));
    let sheet = Sheet::new(vec!["Name".to_string(), "Note".to_string()], vec![row]);

    let encoded = encode_workbook(&sheet).unwrap();
    let decoded = decode_first_sheet(&encoded).unwrap();

    assert_eq!(decoded.rows.len(), 1);
    assert_eq!(decoded.rows[0]["Name"], json!("Carol"));
    assert_eq!(decoded.rows[0]["Note"], json!(""));
}

#[test]
fn given_header_only_workbook_when_decoding_then_columns_survive_with_no_rows() {
    let sheet = Sheet::new(vec!["Name".to_string(), "Score".to_string()], Vec::new());

    let encoded = encode_workbook(&sheet).unwrap();
    let decoded = decode_first_sheet(&encoded).unwrap();

    assert_eq!(decoded.columns, sheet.columns);
    assert!(decoded.rows.is_empty());
}

#[test]
fn given_bytes_that_are_not_a_workbook_when_decoding_then_fails_with_decode_error() {
    let result = decode_first_sheet(b"this is definitely not a spreadsheet");

    assert!(matches!(result, Err(DecodeError::UnreadableWorkbook(_))));
}
