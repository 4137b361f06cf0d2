use crate::core::currency::Currency;
use crate::core::decimal::{self, checked};
use crate::core::error::{MoneyError, Result};
use crate::core::money::Money;
use log::trace;

impl Money {
    /// Whether this amount is denominated in `currency`.
    pub fn is_in(&self, currency: &Currency) -> bool {
        self.currency() == currency
    }

    /// Re-denominate this amount into `target` at `rate` units per unit.
    ///
    /// The rate is supplied by the caller; no rate source is consulted.
    ///
    /// ```
    /// use exact_money::prelude::*;
    /// use rust_decimal_macros::dec;
    ///
    /// let dollar = Money::with_code(1.0, "USD")?;
    /// let euros = dollar.convert(0.88, Currency::new("EUR")?)?;
    /// assert_eq!(euros.amount(), dec!(0.88));
    /// assert_eq!(euros.currency().as_str(), "EUR");
    /// # Ok::<(), MoneyError>(())
    /// ```
    pub fn convert(&self, rate: f64, target: Currency) -> Result<Money> {
        if self.is_in(&target) {
            return Err(MoneyError::SameCurrencyConversion(target));
        }
        let rate = decimal::from_f64(rate).map_err(|_| MoneyError::InvalidRate(rate.to_string()))?;
        let converted = checked(self.amount().checked_mul(rate), "conversion")?;
        trace!("converting {self} into {target} at {rate}");
        Ok(Money::from_decimal(converted, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn code(code: &str) -> Currency {
        Currency::new(code).unwrap()
    }

    #[test]
    fn test_convert() {
        let euros = Money::new(1.0, code("USD"))
            .unwrap()
            .convert(0.88, code("EUR"))
            .unwrap();
        assert_eq!(euros, Money::new(0.88, code("EUR")).unwrap());
    }

    #[test]
    fn test_convert_is_exact() {
        let yen = Money::new(19.99, code("USD"))
            .unwrap()
            .convert(151.37, code("JPY"))
            .unwrap();
        assert_eq!(yen.amount(), dec!(3025.8863));
    }

    #[test]
    fn test_convert_same_currency_rejected() {
        let money = Money::new(1.0, code("USD")).unwrap();
        assert!(matches!(
            money.convert(1.0, code("usd")),
            Err(MoneyError::SameCurrencyConversion(_))
        ));
        assert!(matches!(
            money.convert(f64::NAN, code("USD")),
            Err(MoneyError::SameCurrencyConversion(_))
        ));
    }

    #[test]
    fn test_convert_invalid_rate() {
        let money = Money::new(1.0, code("USD")).unwrap();
        for rate in [f64::NAN, f64::INFINITY] {
            assert!(matches!(
                money.convert(rate, code("EUR")),
                Err(MoneyError::InvalidRate(_))
            ));
        }
    }

    #[test]
    fn test_convert_beyond_decimal_range_overflows() {
        let big = Money::new(7.9e28, code("EUR")).unwrap();
        assert_eq!(
            big.convert(2.0, code("USD")),
            Err(MoneyError::Overflow { operation: "conversion" })
        );
    }

    #[test]
    fn test_is_in() {
        let money = Money::new(1.0, code("USD")).unwrap();
        assert!(money.is_in(&code("USD")));
        assert!(!money.is_in(&code("EUR")));
    }
}
