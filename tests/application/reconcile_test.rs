use serde_json::{json, Value};

use rowmill::application::services::reconcile;
use rowmill::domain::{ProcessingMode, RowRecord, Sheet};

fn sample_sheet() -> Sheet {
    let mut first = RowRecord::new();
    first.insert("Title".to_string(), json!("Login fails"));
    first.insert("Problem".to_string(), json!("[APP] Cannot log in"));

    let mut second = RowRecord::new();
    second.insert("Title".to_string(), json!("Crash on startup"));
    second.insert("Problem".to_string(), json!("App crashes immediately"));

    let mut third = RowRecord::new();
    third.insert("Title".to_string(), json!("Slow sync"));
    third.insert("Problem".to_string(), json!("Sync takes minutes"));

    Sheet::new(
        vec!["Title".to_string(), "Problem".to_string()],
        vec![first, second, third],
    )
}

fn full_reply() -> Vec<Value> {
    vec![
        json!({"Module": "Auth", "Summarized Problem": "User cannot log in", "Severity": "High"}),
        json!({"Module": "Core", "Summarized Problem": "App crashes on startup", "Severity": "Critical"}),
        json!({"Module": "Sync", "Summarized Problem": "Sync is slow", "Severity": "Medium"}),
    ]
}

#[test]
fn given_full_reply_when_reconciling_then_row_count_and_originals_are_preserved() {
    let sheet = sample_sheet();

    let merged = reconcile(&sheet, &full_reply(), ProcessingMode::Structured);

    assert_eq!(merged.rows.len(), sheet.rows.len());
    for (merged_row, original_row) in merged.rows.iter().zip(&sheet.rows) {
        for column in &sheet.columns {
            assert_eq!(merged_row.get(column), original_row.get(column));
        }
    }
}

#[test]
fn given_full_reply_when_reconciling_then_added_fields_are_merged_by_position() {
    let sheet = sample_sheet();

    let merged = reconcile(&sheet, &full_reply(), ProcessingMode::Structured);

    assert_eq!(merged.rows[0]["Module"], json!("Auth"));
    assert_eq!(merged.rows[1]["Severity"], json!("Critical"));
    assert_eq!(merged.rows[2]["Summarized Problem"], json!("Sync is slow"));
}

#[test]
fn given_structured_mode_when_reconciling_then_output_columns_follow_declared_order() {
    let sheet = sample_sheet();

    let merged = reconcile(&sheet, &full_reply(), ProcessingMode::Structured);

    assert_eq!(
        merged.columns,
        vec!["Title", "Problem", "Module", "Summarized Problem", "Severity"]
    );
}

#[test]
fn given_reply_shorter_than_input_when_reconciling_then_tail_rows_get_empty_fields() {
    let sheet = sample_sheet();
    let reply = full_reply()[..2].to_vec();

    let merged = reconcile(&sheet, &reply, ProcessingMode::Structured);

    assert_eq!(merged.rows.len(), 3);
    assert_eq!(merged.rows[2]["Module"], json!(""));
    assert_eq!(merged.rows[2]["Summarized Problem"], json!(""));
    assert_eq!(merged.rows[2]["Severity"], json!(""));
    assert_eq!(merged.rows[2]["Title"], json!("Slow sync"));
}

#[test]
fn given_reply_that_echoes_original_columns_when_reconciling_then_originals_win() {
    let sheet = sample_sheet();
    let reply = vec![
        json!({"Title": "OVERWRITTEN", "Module": "Auth", "Summarized Problem": "x", "Severity": "Low"}),
    ];

    let merged = reconcile(&sheet, &reply, ProcessingMode::Structured);

    assert_eq!(merged.rows[0]["Title"], json!("Login fails"));
}

#[test]
fn given_wrong_shaped_field_when_reconciling_then_it_defaults_to_empty_string() {
    let sheet = sample_sheet();
    let reply = vec![json!({"Module": 42, "Summarized Problem": ["a"], "Severity": "Low"})];

    let merged = reconcile(&sheet, &reply, ProcessingMode::Structured);

    assert_eq!(merged.rows[0]["Module"], json!(""));
    assert_eq!(merged.rows[0]["Summarized Problem"], json!(""));
    assert_eq!(merged.rows[0]["Severity"], json!("Low"));
}

#[test]
fn given_no_space_alias_key_when_reconciling_then_it_is_accepted() {
    let sheet = sample_sheet();
    let reply = vec![json!({"Module": "Auth", "SummarizedProblem": "User cannot log in", "Severity": "High"})];

    let merged = reconcile(&sheet, &reply, ProcessingMode::Structured);

    assert_eq!(merged.rows[0]["Summarized Problem"], json!("User cannot log in"));
}

#[test]
fn given_non_object_entry_when_reconciling_then_row_survives_with_empty_fields() {
    let sheet = sample_sheet();
    let reply = vec![json!("not an object"), json!(null), json!({"Module": "Sync", "Summarized Problem": "s", "Severity": "Low"})];

    let merged = reconcile(&sheet, &reply, ProcessingMode::Structured);

    assert_eq!(merged.rows[0]["Module"], json!(""));
    assert_eq!(merged.rows[1]["Module"], json!(""));
    assert_eq!(merged.rows[2]["Module"], json!("Sync"));
}

#[test]
fn given_freeform_reply_when_reconciling_then_new_keys_append_in_first_seen_order() {
    let sheet = sample_sheet();
    let reply = vec![
        json!({"Category": "bug", "Title": "ignored"}),
        json!({"Category": "feature", "Priority": 2}),
    ];

    let merged = reconcile(&sheet, &reply, ProcessingMode::Freeform);

    assert_eq!(
        merged.columns,
        vec!["Title", "Problem", "Category", "Priority"]
    );
    assert_eq!(merged.rows[0]["Category"], json!("bug"));
    assert_eq!(merged.rows[0]["Priority"], json!(""));
    assert_eq!(merged.rows[1]["Priority"], json!(2));
    // The echoed original column never overwrites the source value.
    assert_eq!(merged.rows[0]["Title"], json!("Login fails"));
    assert_eq!(merged.rows[2]["Category"], json!(""));
}

#[test]
fn given_empty_reply_in_freeform_mode_when_reconciling_then_sheet_is_unchanged() {
    let sheet = sample_sheet();

    let merged = reconcile(&sheet, &[], ProcessingMode::Freeform);

    assert_eq!(merged, sheet);
}
