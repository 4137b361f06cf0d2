//! # exact-money
//!
//! Immutable currency amounts with exact decimal arithmetic.
//!
//! Every amount is stored as an integer `base` at a known number of
//! `decimals`, so `0.1 + 0.2` is exactly `0.3`. Binary operations refuse to
//! combine amounts of different currencies.
//!
//! ## Architecture
//!
//! - **core**: The `Money` value, currencies, the decimal amount engine, errors
//! - **operations**: Compatibility guard, arithmetic, comparison, conversion

pub mod core;
pub mod operations;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::currency::{Currency, DEFAULT_CURRENCY_CODE};
    pub use crate::core::decimal::MAX_DECIMALS;
    pub use crate::core::error::MoneyError;
    pub use crate::core::money::Money;
    pub use crate::core::operand::Operand;
    pub use crate::core::parts::MoneyParts;
}
