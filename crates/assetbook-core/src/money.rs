//! Monetary rounding and time constants.

use rust_decimal::{Decimal, RoundingStrategy};

/// Seconds in a civil day, used for day-count proration.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Average days per year, fixed at 365.25 to smooth leap years rather
/// than recomputed per calendar.
pub const DAYS_PER_YEAR: Decimal = Decimal::from_parts(36_525, 0, 0, false, 2);

/// Round a monetary value to whole cents.
///
/// Uses round-half-away-from-zero: `0.005` rounds to `0.01`, not `0.00`.
/// `Decimal::round_dp` defaults to banker's rounding, which would break
/// compatibility with downstream consumers at exact half-cents.
#[must_use]
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn days_per_year_averages_leap_years() {
        assert_eq!(DAYS_PER_YEAR, dec!(365.25));
    }

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_cents(dec!(10.004)), dec!(10.00));
        assert_eq!(round_cents(dec!(10.006)), dec!(10.01));
        assert_eq!(round_cents(dec!(10)), dec!(10));
    }

    #[test]
    fn half_cents_round_away_from_zero() {
        assert_eq!(round_cents(dec!(2.675)), dec!(2.68));
        assert_eq!(round_cents(dec!(-2.675)), dec!(-2.68));
        assert_eq!(round_cents(dec!(0.005)), dec!(0.01));
    }
}
