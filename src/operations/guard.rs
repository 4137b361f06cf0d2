use crate::core::error::{MoneyError, Result};
use crate::core::money::Money;
use crate::core::operand::Operand;
use std::borrow::Cow;

/// Fail unless `a` and `b` are denominated in the same currency.
///
/// # Examples
///
/// ```
/// use exact_money::operations::guard::ensure_compatible;
/// use exact_money::prelude::*;
///
/// let usd = Money::with_code(1.0, "USD").unwrap();
/// let eur = Money::with_code(1.0, "EUR").unwrap();
/// assert!(ensure_compatible(&usd, &usd).is_ok());
/// assert!(matches!(
///     ensure_compatible(&usd, &eur),
///     Err(MoneyError::CurrencyMismatch { .. })
/// ));
/// ```
pub fn ensure_compatible(a: &Money, b: &Money) -> Result<()> {
    if a.currency() == b.currency() {
        Ok(())
    } else {
        Err(MoneyError::CurrencyMismatch {
            left: a.currency().clone(),
            right: b.currency().clone(),
        })
    }
}

/// Resolve `operand` and check it against `receiver`.
///
/// Every binary operation goes through here before touching any amounts.
pub(crate) fn compatible_operand<'a, O: Operand>(
    receiver: &Money,
    operand: &'a O,
) -> Result<Cow<'a, Money>> {
    let other = operand.resolve()?;
    ensure_compatible(receiver, &other)?;
    Ok(other)
}
