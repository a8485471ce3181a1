//! Per-asset and batch result records.
//!
//! These are the wire shapes consumed by callers. Field names and
//! their order match the historical JSON output, so struct field order
//! is load-bearing for byte-stable serialization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Depreciation status of an asset, as reported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    /// Still in service; depreciation continues to accrue.
    #[serde(rename = "ACTIVE")]
    Active,
    /// Removed from service; net book value frozen at the disposal value.
    #[serde(rename = "DISPOSED")]
    Disposed,
}

/// A rejected item, serialized as `{"error": ..., "asset_id": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetError {
    /// Human-readable validation message.
    pub error: String,
    /// Identifier of the rejected asset.
    pub asset_id: String,
}

/// Computed metrics for an asset still in service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveAsset {
    /// Asset identifier.
    pub asset_id: String,
    /// Always [`AssetStatus::Active`].
    pub status: AssetStatus,
    /// Whole days since purchase, clamped to at least 1.
    pub days_in_use: i64,
    /// Yearly depreciation expense, rounded to cents.
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_depreciation: Decimal,
    /// Depreciation accrued to date, capped at the purchase amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub accumulated_depreciation: Decimal,
    /// Remaining value, floored at zero.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_book_value: Decimal,
    /// Echo of the input purchase amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub purchase_amount: Decimal,
    /// Echo of the input depreciation rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub depreciation_rate: Decimal,
    /// The evaluation instant, epoch seconds.
    pub calculation_timestamp: i64,
}

/// Computed metrics for a disposed asset.
///
/// Disposal freezes the book: the net book value is exactly the
/// disposal proceeds and no further depreciation accrues. Disposed
/// figures are emitted unrounded; only the active path rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposedAsset {
    /// Asset identifier.
    pub asset_id: String,
    /// Always [`AssetStatus::Disposed`].
    pub status: AssetStatus,
    /// Frozen at the disposal value.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_book_value: Decimal,
    /// `purchase_amount - disposal_value`.
    #[serde(with = "rust_decimal::serde::float")]
    pub accumulated_depreciation: Decimal,
    /// Always zero once disposed.
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_depreciation: Decimal,
    /// Proceeds at disposal.
    #[serde(with = "rust_decimal::serde::float")]
    pub disposal_value: Decimal,
    /// Disposal date, epoch seconds.
    pub disposal_date: i64,
    /// Echo of the input purchase amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub purchase_amount: Decimal,
    /// Echo of the input depreciation rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub depreciation_rate: Decimal,
    /// The evaluation instant, epoch seconds.
    pub calculation_timestamp: i64,
}

/// Outcome of one asset calculation.
///
/// Serialized untagged: the `error` field marks a rejection, otherwise
/// the `status` field distinguishes active from disposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetResult {
    /// Validation failed; the item was rejected.
    Error(AssetError),
    /// Asset disposed on or before the evaluation instant.
    Disposed(DisposedAsset),
    /// Asset still in service.
    Active(ActiveAsset),
}

impl AssetResult {
    /// Build an error result from a validation message.
    #[must_use]
    pub fn error(message: impl Into<String>, asset_id: impl Into<String>) -> Self {
        Self::Error(AssetError {
            error: message.into(),
            asset_id: asset_id.into(),
        })
    }

    /// Whether this result is a rejection.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The asset identifier, whichever variant carries it.
    #[must_use]
    pub fn asset_id(&self) -> &str {
        match self {
            Self::Error(e) => &e.asset_id,
            Self::Disposed(d) => &d.asset_id,
            Self::Active(a) => &a.asset_id,
        }
    }

    /// The net book value, if the calculation succeeded.
    #[must_use]
    pub const fn net_book_value(&self) -> Option<Decimal> {
        match self {
            Self::Error(_) => None,
            Self::Disposed(d) => Some(d.net_book_value),
            Self::Active(a) => Some(a.net_book_value),
        }
    }

    /// The accumulated depreciation, if the calculation succeeded.
    #[must_use]
    pub const fn accumulated_depreciation(&self) -> Option<Decimal> {
        match self {
            Self::Error(_) => None,
            Self::Disposed(d) => Some(d.accumulated_depreciation),
            Self::Active(a) => Some(a.accumulated_depreciation),
        }
    }
}

/// Aggregated outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Per-item results, in input order.
    pub assets: Vec<AssetResult>,
    /// Number of items processed (the input length).
    pub processed_count: usize,
    /// Number of items rejected by validation.
    pub error_count: usize,
    /// Number of items calculated successfully.
    pub success_count: usize,
    /// The evaluation instant, epoch seconds, sampled once per batch.
    pub timestamp: i64,
}

/// A top-level failure, serialized as a bare `{"error": ...}` object.
///
/// Distinct from [`AssetError`]: there is no `asset_id` because the
/// failure is about the payload as a whole, not any one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputError {
    /// What was wrong with the payload.
    pub error: String,
}

/// The output envelope of a batch call: either a full batch result or
/// a single top-level input error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchOutput {
    /// The payload was a well-formed array; per-item outcomes inside.
    Batch(BatchResult),
    /// The payload was structurally invalid; nothing was processed.
    Invalid(InputError),
}
