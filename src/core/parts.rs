use crate::core::currency::Currency;
use serde::{Deserialize, Serialize};

/// The integer representation of a [`Money`](crate::core::money::Money).
///
/// This is the shape handed to persistence or wire layers: `base` at
/// `decimals` fractional digits, plus the currency. Feeding it back through
/// [`Money::from_parts`](crate::core::money::Money::from_parts) reproduces
/// the original amount exactly, because nothing is re-derived from a float.
///
/// `base` is serialized as a string so it survives JSON consumers that read
/// numbers as doubles.
///
/// # Examples
///
/// ```
/// use exact_money::prelude::*;
///
/// let price = Money::with_code(19.99, "USD").unwrap();
/// let parts = price.to_parts();
/// assert_eq!(parts.base, 1999);
/// assert_eq!(parts.decimals, 2);
///
/// let restored = Money::try_from(parts).unwrap();
/// assert_eq!(restored, price);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoneyParts {
    #[serde(with = "base_as_string")]
    pub base: i128,
    pub decimals: u32,
    /// Absent currency means "use the default" when constructing, but makes
    /// the record unusable as an operand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

mod base_as_string {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(base: &i128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(base)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = i128;
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an integer or a string of decimal digits")
            }
            fn visit_str<E: de::Error>(self, s: &str) -> Result<i128, E> {
                s.trim()
                    .parse()
                    .map_err(|_| E::custom(format!("invalid base: {s:?}")))
            }
            fn visit_i64<E: de::Error>(self, v: i64) -> Result<i128, E> {
                Ok(i128::from(v))
            }
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<i128, E> {
                Ok(i128::from(v))
            }
        }
        deserializer.deserialize_any(V)
    }
}
