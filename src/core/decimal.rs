//! Decimal amount engine.
//!
//! Amounts are held as `rust_decimal::Decimal`, a 96-bit integer mantissa
//! paired with a base-10 scale. That pair is exactly the `base / 10^decimals`
//! representation a [`Money`](crate::core::money::Money) exposes, so all
//! arithmetic stays in integer space and never accumulates binary
//! floating-point error. Native `f64` values only cross this boundary on the
//! way in (construction) and on the way out ([`to_f64`]).

use crate::core::error::{MoneyError, Result};
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Upper bound on the fractional digits derived for an amount.
pub const MAX_DECIMALS: u32 = 20;

/// Convert a native float into the exact decimal it denotes.
///
/// Goes through the shortest text that round-trips to the same `f64`, so
/// `0.1` becomes exactly `0.1` rather than the binary expansion
/// `0.1000000000000000055511151231257827`.
pub fn from_f64(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(MoneyError::InvalidAmount(format!("{value} is not a finite number")));
    }
    let text = value.to_string();
    Decimal::from_str(&text).map_err(|e| MoneyError::InvalidAmount(format!("{text}: {e}")))
}

/// Read a decimal back as the nearest native float.
pub fn to_f64(value: &Decimal) -> f64 {
    value.to_string().parse::<f64>().unwrap_or(0.0)
}

/// Number of fractional digits needed to make `value` an integer.
///
/// Scales the magnitude by ten until it has no fractional part, stopping
/// at [`MAX_DECIMALS`] or when another step would overflow.
pub fn decimal_places(value: Decimal) -> u32 {
    let mut scaled = value.abs();
    let mut count = 0;
    while !scaled.fract().is_zero() && count < MAX_DECIMALS {
        match scaled.checked_mul(Decimal::TEN) {
            Some(next) => scaled = next,
            None => break,
        }
        count += 1;
    }
    count
}

/// Re-express `value` at exactly its derived number of decimal places.
///
/// Digits past the cap are dropped with `strategy`. The returned decimal's
/// scale equals its derived `decimals`, and its mantissa is the `base`.
/// Anything that rounds to zero comes back as a plain, unsigned zero.
pub fn exact(value: Decimal, strategy: RoundingStrategy) -> Decimal {
    let decimals = decimal_places(value);
    if decimals == MAX_DECIMALS && value.normalize().scale() > MAX_DECIMALS {
        debug!("amount {value} exceeds {MAX_DECIMALS} decimal places, rounding");
    }
    let mut rounded = value.round_dp_with_strategy(decimals, strategy);
    if rounded.is_zero() {
        return Decimal::ZERO;
    }
    rounded.rescale(decimals);
    rounded
}

/// Lift a checked `Decimal` operation into the crate's error type.
pub(crate) fn checked(result: Option<Decimal>, operation: &'static str) -> Result<Decimal> {
    result.ok_or(MoneyError::Overflow { operation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_f64_is_exact() {
        assert_eq!(from_f64(0.1).unwrap(), dec!(0.1));
        assert_eq!(from_f64(1.15555555).unwrap(), dec!(1.15555555));
        assert_eq!(from_f64(-42.5).unwrap(), dec!(-42.5));
        assert_eq!(from_f64(7.0).unwrap(), dec!(7));
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(from_f64(value), Err(MoneyError::InvalidAmount(_))));
        }
    }

    #[test]
    fn test_from_f64_rejects_out_of_range() {
        assert!(matches!(from_f64(1e30), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places(dec!(0)), 0);
        assert_eq!(decimal_places(dec!(12)), 0);
        assert_eq!(decimal_places(dec!(12.00)), 0);
        assert_eq!(decimal_places(dec!(0.5)), 1);
        assert_eq!(decimal_places(dec!(-3.125)), 3);
        assert_eq!(decimal_places(dec!(1.15555555)), 8);
    }

    #[test]
    fn test_decimal_places_capped() {
        assert_eq!(decimal_places(dec!(0.3333333333333333333333333333)), MAX_DECIMALS);
    }

    #[test]
    fn test_exact_sets_scale_to_decimals() {
        let value = exact(dec!(1.500), RoundingStrategy::ToNegativeInfinity);
        assert_eq!(value.scale(), 1);
        assert_eq!(value.mantissa(), 15);
    }

    #[test]
    fn test_exact_floors_past_cap() {
        let value = exact(
            dec!(0.1234567890123456789099),
            RoundingStrategy::ToNegativeInfinity,
        );
        assert_eq!(value, dec!(0.12345678901234567890));
        assert_eq!(value.scale(), MAX_DECIMALS);
    }

    #[test]
    fn test_exact_rounds_half_up_past_cap() {
        let value = exact(
            dec!(0.6666666666666666666666666667),
            RoundingStrategy::MidpointAwayFromZero,
        );
        assert_eq!(value, dec!(0.66666666666666666667));
    }

    #[test]
    fn test_exact_zero_has_single_form() {
        for value in [dec!(0.000), dec!(-0), dec!(0.0000000000000000000001)] {
            let zero = exact(value, RoundingStrategy::ToNegativeInfinity);
            assert_eq!(zero.scale(), 0);
            assert_eq!(zero.mantissa(), 0);
            assert!(zero.is_sign_positive());
        }
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(to_f64(&dec!(0.3)), 0.3);
        assert_eq!(to_f64(&dec!(-1.15555555)), -1.15555555);
    }

    #[test]
    fn test_checked_overflow() {
        let err = checked(Decimal::MAX.checked_add(Decimal::ONE), "addition").unwrap_err();
        assert_eq!(err, MoneyError::Overflow { operation: "addition" });
    }
}
