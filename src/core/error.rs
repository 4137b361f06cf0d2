use crate::core::currency::Currency;
use thiserror::Error;

/// Errors arising from constructing or combining [`Money`](crate::core::money::Money) values.
///
/// Every operation is pure and synchronous, so errors are surfaced to the
/// caller immediately and are never retried or corrected internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),

    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    #[error("currency mismatch: cannot combine {left} with {right}")]
    CurrencyMismatch { left: Currency, right: Currency },

    #[error("cannot convert {0} into itself")]
    SameCurrencyConversion(Currency),

    #[error("invalid conversion rate: {0}")]
    InvalidRate(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("{operation} overflowed the representable decimal range")]
    Overflow { operation: &'static str },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MoneyError>;
