//! Tests for the abook-depr command internals.

use assetbook::cmd::depr::{read_payload, render, respond, NO_INPUT_MESSAGE};
use serde_json::{json, Value};
use std::io::Write;

const NOW: i64 = 1_700_000_000;
const DAY: i64 = 86_400;

fn sample_payload() -> String {
    json!([
        {
            "id": "SRV-001",
            "purchase_amount": 10000,
            "depreciation_rate": 10,
            "purchase_date": NOW - 100 * DAY
        },
        {
            "id": "SRV-002",
            "purchase_amount": -5,
            "depreciation_rate": 10,
            "purchase_date": NOW - 100 * DAY
        }
    ])
    .to_string()
}

#[test]
fn render_emits_batch_json() {
    let rendered = render(&sample_payload(), NOW, false).unwrap();
    let wire: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(wire["processed_count"], 2);
    assert_eq!(wire["success_count"], 1);
    assert_eq!(wire["error_count"], 1);
    assert_eq!(wire["assets"][0]["status"], "ACTIVE");
    assert_eq!(
        wire["assets"][1]["error"],
        "Purchase amount cannot be negative"
    );
    // Compact by default
    assert!(!rendered.contains('\n'));
}

#[test]
fn render_pretty_spans_lines() {
    let rendered = render(&sample_payload(), NOW, true).unwrap();
    assert!(rendered.contains('\n'));
    let wire: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(wire["processed_count"], 2);
}

#[test]
fn render_structural_error_is_bare_object() {
    let rendered = render(r#"{"id": "A"}"#, NOW, false).unwrap();
    let wire: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(
        wire,
        json!({"error": "Invalid input: expected array of assets"})
    );
}

#[test]
fn empty_payload_reports_no_input_and_fails() {
    let (rendered, status) = respond("", NOW, false).unwrap();
    assert_eq!(status, 1);
    let wire: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(wire, json!({"error": NO_INPUT_MESSAGE}));
}

#[test]
fn non_empty_payload_exits_clean_even_with_errors() {
    // Per-item and structural errors are data, not process failures.
    let (_, status) = respond(&sample_payload(), NOW, false).unwrap();
    assert_eq!(status, 0);
    let (rendered, status) = respond("not an array", NOW, false).unwrap();
    assert_eq!(status, 0);
    let wire: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(
        wire,
        json!({"error": "Invalid input: expected array of assets"})
    );
}

#[test]
fn read_payload_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", sample_payload()).unwrap();

    let payload = read_payload(Some(file.path())).unwrap();
    assert_eq!(payload, sample_payload());
}

#[test]
fn read_payload_missing_file_fails_with_path() {
    let error = read_payload(Some(std::path::Path::new("/no/such/assets.json"))).unwrap_err();
    assert!(error.to_string().contains("/no/such/assets.json"));
}
