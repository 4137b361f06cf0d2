use crate::core::currency::Currency;
use crate::core::decimal;
use crate::core::error::{MoneyError, Result};
use crate::core::parts::MoneyParts;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::Neg;

/// An immutable amount of money in a single currency.
///
/// The amount is kept as an exact scaled integer: [`base`](Money::base) at
/// [`decimals`](Money::decimals) fractional digits, so that
/// `amount == base / 10^decimals` always holds. Every operation returns a
/// new value; there is no way to change a `Money` after it is built.
///
/// # Examples
///
/// ```
/// use exact_money::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let a = Money::new(0.1, Currency::new("USD")?)?;
/// let b = Money::new(0.2, Currency::new("USD")?)?;
///
/// let sum = a.add(&b)?;
/// assert_eq!(sum.amount(), dec!(0.3));
/// assert_eq!(sum.to_f64(), 0.3);
/// # Ok::<(), MoneyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    /// Scale of this decimal is the `decimals` count; its mantissa is `base`.
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create money from a native amount.
    ///
    /// Fails with [`MoneyError::InvalidAmount`] if `amount` is NaN, infinite,
    /// or has a magnitude of about 7.9e28 or more, the largest value a
    /// 96-bit decimal mantissa holds. Amounts needing more than
    /// [`MAX_DECIMALS`](decimal::MAX_DECIMALS) fractional digits are floored
    /// at that many places.
    pub fn new(amount: f64, currency: Currency) -> Result<Self> {
        let value = decimal::from_f64(amount)?;
        Ok(Self {
            amount: decimal::exact(value, RoundingStrategy::ToNegativeInfinity),
            currency,
        })
    }

    /// Create money in the default currency.
    pub fn from_amount(amount: f64) -> Result<Self> {
        Self::new(amount, Currency::default())
    }

    /// Create money from a currency code; a blank code selects the default.
    pub fn with_code(amount: f64, code: &str) -> Result<Self> {
        let currency = Currency::resolve(code)?;
        Self::new(amount, currency)
    }

    /// Create money from an already exact decimal.
    ///
    /// Values needing more than [`MAX_DECIMALS`](decimal::MAX_DECIMALS)
    /// fractional digits are rounded half away from zero.
    pub fn from_decimal(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: decimal::exact(amount, RoundingStrategy::MidpointAwayFromZero),
            currency,
        }
    }

    /// Rebuild money from its integer representation.
    ///
    /// `decimals` is taken as given rather than re-derived, so a value
    /// produced by [`to_parts`](Money::to_parts) comes back bit-for-bit.
    pub fn from_parts(base: i128, decimals: u32, currency: Option<Currency>) -> Result<Self> {
        let amount = Decimal::try_from_i128_with_scale(base, decimals).map_err(|e| {
            MoneyError::InvalidAmount(format!("base {base} at {decimals} decimals: {e}"))
        })?;
        Ok(Self {
            amount,
            currency: currency.unwrap_or_default(),
        })
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    // --- Accessors ---

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn decimals(&self) -> u32 {
        self.amount.scale()
    }

    pub fn base(&self) -> i128 {
        self.amount.mantissa()
    }

    /// The amount as a native float, for display or interop at the boundary.
    pub fn to_f64(&self) -> f64 {
        decimal::to_f64(&self.amount)
    }

    /// Structural record from which [`from_parts`](Money::from_parts)
    /// reconstructs an identical value.
    pub fn to_parts(&self) -> MoneyParts {
        MoneyParts {
            base: self.base(),
            decimals: self.decimals(),
            currency: Some(self.currency.clone()),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency.clone(),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero(Currency::default())
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        if self.amount.is_zero() {
            return self;
        }
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl TryFrom<MoneyParts> for Money {
    type Error = MoneyError;

    fn try_from(parts: MoneyParts) -> Result<Self> {
        Self::from_parts(parts.base, parts.decimals, parts.currency)
    }
}
