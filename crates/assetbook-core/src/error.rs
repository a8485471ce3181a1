//! Per-asset validation errors.

use thiserror::Error;

/// A validation failure for a single asset.
///
/// The display strings are part of the output contract: callers match
/// on the `error` field of a rejected item, so the messages must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The `id` field was empty.
    #[error("Missing asset ID")]
    MissingId,
    /// The purchase amount was below zero.
    #[error("Purchase amount cannot be negative")]
    NegativePurchaseAmount,
    /// The purchase amount was exactly zero.
    #[error("Purchase amount must be greater than zero")]
    ZeroPurchaseAmount,
    /// The depreciation rate was outside the `[0, 100]` percent range.
    #[error("Depreciation rate must be between 0 and 100")]
    RateOutOfRange,
    /// The purchase date was non-positive or after the evaluation instant.
    #[error("Invalid purchase date")]
    InvalidPurchaseDate,
    /// The disposal value was negative or above the purchase amount.
    #[error("Invalid disposal value")]
    InvalidDisposalValue,
    /// The elapsed time since purchase came out negative.
    ///
    /// Logically unreachable after [`Self::InvalidPurchaseDate`] has
    /// been checked, but kept as a second guard in the active path with
    /// its own message to match observed output.
    #[error("Purchase date is in the future")]
    FuturePurchaseDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(ValidationError::MissingId.to_string(), "Missing asset ID");
        assert_eq!(
            ValidationError::NegativePurchaseAmount.to_string(),
            "Purchase amount cannot be negative"
        );
        assert_eq!(
            ValidationError::ZeroPurchaseAmount.to_string(),
            "Purchase amount must be greater than zero"
        );
        assert_eq!(
            ValidationError::RateOutOfRange.to_string(),
            "Depreciation rate must be between 0 and 100"
        );
        assert_eq!(
            ValidationError::InvalidPurchaseDate.to_string(),
            "Invalid purchase date"
        );
        assert_eq!(
            ValidationError::InvalidDisposalValue.to_string(),
            "Invalid disposal value"
        );
        assert_eq!(
            ValidationError::FuturePurchaseDate.to_string(),
            "Purchase date is in the future"
        );
    }
}
