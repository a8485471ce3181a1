//! Batch processing with per-item error isolation.

use assetbook_core::{AssetInput, AssetResult, BatchOutput, BatchResult, InputError};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::calculator::calculate;

/// Message for a payload that is not an array of asset objects.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input: expected array of assets";

/// Run the calculator over a sequence of assets.
///
/// Items are evaluated in input order and the output keeps that order.
/// A rejected item is recorded as its [`AssetResult::Error`] and never
/// stops the remaining items from computing. `now` applies to every
/// item so the whole batch is judged against one instant.
#[must_use]
pub fn process_batch(items: &[AssetInput], now: i64) -> BatchResult {
    let assets: Vec<AssetResult> = items.iter().map(|item| calculate(item, now)).collect();
    let error_count = assets.iter().filter(|result| result.is_error()).count();
    BatchResult {
        processed_count: assets.len(),
        error_count,
        success_count: assets.len() - error_count,
        assets,
        timestamp: now,
    }
}

/// Decode a raw JSON payload and run the batch.
///
/// Anything that is not a JSON array, including unparseable text,
/// short-circuits into the top-level [`BatchOutput::Invalid`] shape
/// without processing any items. Array elements are decoded leniently,
/// with the historical coercions: a non-string `id` is stringified
/// from its JSON text, numeric strings are accepted for decimal
/// fields, and float epochs truncate to whole seconds. A missing or
/// null `id` becomes `"unknown"`; anything still unusable becomes `0`,
/// leaving it to validation to reject the item rather than failing its
/// siblings.
#[must_use]
pub fn process_batch_json(payload: &str, now: i64) -> BatchOutput {
    let Ok(value) = serde_json::from_str::<Value>(payload) else {
        return invalid_input();
    };
    let Some(array) = value.as_array() else {
        return invalid_input();
    };
    let items: Vec<AssetInput> = array.iter().map(decode_item).collect();
    BatchOutput::Batch(process_batch(&items, now))
}

fn invalid_input() -> BatchOutput {
    BatchOutput::Invalid(InputError {
        error: INVALID_INPUT_MESSAGE.to_string(),
    })
}

fn decode_item(value: &Value) -> AssetInput {
    AssetInput {
        id: id_field(value),
        purchase_amount: decimal_field(value, "purchase_amount"),
        depreciation_rate: decimal_field(value, "depreciation_rate"),
        purchase_date: int_field(value, "purchase_date"),
        disposal_date: int_field(value, "disposal_date"),
        disposal_value: decimal_field(value, "disposal_value"),
    }
}

/// A missing or null `id` falls back to `"unknown"`; any other
/// non-string value is stringified from its JSON text (`42` -> `"42"`).
fn id_field(value: &Value) -> String {
    match value.get("id") {
        None | Some(Value::Null) => "unknown".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Numbers pass through; numeric strings parse (`"10000"` -> 10000);
/// everything else is zero.
fn decimal_field(value: &Value, key: &str) -> Decimal {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().and_then(Decimal::from_f64).unwrap_or_default(),
        Some(Value::String(s)) => s
            .parse::<f64>()
            .ok()
            .and_then(Decimal::from_f64)
            .unwrap_or_default(),
        _ => Decimal::ZERO,
    }
}

/// Integers pass through; float epochs truncate to whole seconds;
/// numeric strings parse; everything else is zero.
fn int_field(value: &Value, key: &str) -> i64 {
    match value.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Some(Value::String(s)) => s.parse::<i64>().unwrap_or_default(),
        _ => 0,
    }
}
