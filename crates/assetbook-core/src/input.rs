//! Per-asset request fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn unknown_id() -> String {
    "unknown".to_string()
}

/// One asset's input fields for a depreciation calculation.
///
/// Dates are epoch seconds. A `disposal_date` of `0` means the asset
/// has not been disposed. Absent fields take the same defaults the
/// batch decoder applies: `"unknown"` for the id, `0` for numbers.
///
/// # Examples
///
/// ```
/// use assetbook_core::AssetInput;
/// use rust_decimal::Decimal;
///
/// let input = AssetInput {
///     id: "LAPTOP-001".to_string(),
///     purchase_amount: Decimal::new(10_000, 0),
///     depreciation_rate: Decimal::new(10, 0),
///     purchase_date: 1_700_000_000,
///     disposal_date: 0,
///     disposal_value: Decimal::ZERO,
/// };
/// assert!(!input.is_disposed(1_750_000_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInput {
    /// Asset identifier; must be non-empty to be valid.
    #[serde(default = "unknown_id")]
    pub id: String,
    /// Original purchase cost; must be positive to be valid.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub purchase_amount: Decimal,
    /// Annual depreciation rate in percent, `[0, 100]`.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub depreciation_rate: Decimal,
    /// Purchase date as epoch seconds; must be positive and not in the future.
    #[serde(default)]
    pub purchase_date: i64,
    /// Disposal date as epoch seconds; `0` means not disposed.
    #[serde(default)]
    pub disposal_date: i64,
    /// Proceeds at disposal; only meaningful when disposed.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub disposal_value: Decimal,
}

impl AssetInput {
    /// Whether the asset counts as disposed at the evaluation instant.
    ///
    /// A disposal date in the future is ignored: the asset is still in
    /// service at `now` and depreciates on the active path.
    #[must_use]
    pub const fn is_disposed(&self, now: i64) -> bool {
        self.disposal_date > 0 && self.disposal_date <= now
    }
}

impl Default for AssetInput {
    fn default() -> Self {
        Self {
            id: unknown_id(),
            purchase_amount: Decimal::ZERO,
            depreciation_rate: Decimal::ZERO,
            purchase_date: 0,
            disposal_date: 0,
            disposal_value: Decimal::ZERO,
        }
    }
}
