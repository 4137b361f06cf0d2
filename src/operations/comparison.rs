use crate::core::error::Result;
use crate::core::money::Money;
use crate::core::operand::Operand;
use crate::operations::guard::compatible_operand;
use std::cmp::Ordering;

impl Money {
    /// Order this amount against another in the same currency.
    pub fn compare(&self, other: impl Operand) -> Result<Ordering> {
        let other = compatible_operand(self, &other)?;
        Ok(self.amount().cmp(&other.amount()))
    }

    pub fn is_equal(&self, other: impl Operand) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    pub fn is_greater_than(&self, other: impl Operand) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn is_greater_than_or_equal_to(&self, other: impl Operand) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    pub fn is_less_than(&self, other: impl Operand) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn is_less_than_or_equal_to(&self, other: impl Operand) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }
}

/// Amounts in different currencies are unordered.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency() != other.currency() {
            return None;
        }
        Some(self.amount().cmp(&other.amount()))
    }
}
