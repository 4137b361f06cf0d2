use crate::core::error::{MoneyError, Result};
use crate::core::money::Money;
use crate::core::parts::MoneyParts;
use std::borrow::Cow;

/// Anything that can stand on the right-hand side of a binary money operation.
///
/// A [`Money`] resolves to itself. A [`MoneyParts`] record resolves only if
/// it names a currency; an operand must say what it is denominated in.
pub trait Operand {
    fn resolve(&self) -> Result<Cow<'_, Money>>;
}

impl Operand for Money {
    fn resolve(&self) -> Result<Cow<'_, Money>> {
        Ok(Cow::Borrowed(self))
    }
}

impl Operand for MoneyParts {
    fn resolve(&self) -> Result<Cow<'_, Money>> {
        let currency = self.currency.clone().ok_or_else(|| {
            MoneyError::InvalidOperand(format!(
                "record with base {} has no currency",
                self.base
            ))
        })?;
        Money::from_parts(self.base, self.decimals, Some(currency)).map(Cow::Owned)
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn resolve(&self) -> Result<Cow<'_, Money>> {
        (**self).resolve()
    }
}
