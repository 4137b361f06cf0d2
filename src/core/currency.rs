use crate::core::error::{MoneyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Code of the currency used when none is supplied.
pub const DEFAULT_CURRENCY_CODE: &str = "EUR";

/// ISO 4217-style currency identity.
///
/// Codes are three or four ASCII letters and are stored upper-cased, so
/// `"usd"` and `"USD"` name the same currency. Equality is structural: two
/// independently constructed values with the same code are equal.
///
/// No lookup table is consulted; any syntactically valid code is accepted,
/// which keeps room for digital or experimental settlement units.
///
/// # Examples
///
/// ```
/// use exact_money::core::currency::Currency;
///
/// let usd = Currency::new("usd").unwrap();
/// assert_eq!(usd, Currency::new("USD").unwrap());
/// assert_eq!(usd.as_str(), "USD");
/// assert!(Currency::new("US").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Resolve a code string into a currency identity.
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref().trim();
        let valid = (3..=4).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphabetic());
        if !valid {
            return Err(MoneyError::InvalidCurrency(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Resolve a code, falling back to the default currency for a blank one.
    pub fn resolve(code: &str) -> Result<Self> {
        if code.trim().is_empty() {
            Ok(Self::default())
        } else {
            Self::new(code)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY_CODE.to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Currency {
    type Error = MoneyError;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}
