use crate::core::decimal::{self, checked};
use crate::core::error::{MoneyError, Result};
use crate::core::money::Money;
use crate::core::operand::Operand;
use crate::operations::guard::compatible_operand;
use rust_decimal::Decimal;

impl Money {
    /// Sum of two amounts in the same currency.
    ///
    /// ```
    /// use exact_money::prelude::*;
    ///
    /// let a = Money::with_code(1.0, "USD")?;
    /// let b = Money::with_code(2.0, "USD")?;
    /// assert_eq!(a.add(&b)?, Money::with_code(3.0, "USD")?);
    /// # Ok::<(), MoneyError>(())
    /// ```
    pub fn add(&self, other: impl Operand) -> Result<Money> {
        let other = compatible_operand(self, &other)?;
        let sum = checked(self.amount().checked_add(other.amount()), "addition")?;
        Ok(Money::from_decimal(sum, self.currency().clone()))
    }

    pub fn subtract(&self, other: impl Operand) -> Result<Money> {
        let other = compatible_operand(self, &other)?;
        let difference = checked(self.amount().checked_sub(other.amount()), "subtraction")?;
        Ok(Money::from_decimal(difference, self.currency().clone()))
    }

    pub fn multiply(&self, other: impl Operand) -> Result<Money> {
        let other = compatible_operand(self, &other)?;
        let product = checked(self.amount().checked_mul(other.amount()), "multiplication")?;
        Ok(Money::from_decimal(product, self.currency().clone()))
    }

    /// Quotient of two amounts in the same currency.
    ///
    /// Non-terminating quotients are rounded half away from zero at the
    /// 20th fractional digit.
    pub fn divide(&self, other: impl Operand) -> Result<Money> {
        let other = compatible_operand(self, &other)?;
        if other.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = checked(self.amount().checked_div(other.amount()), "division")?;
        Ok(Money::from_decimal(quotient, self.currency().clone()))
    }

    /// `percent` percent of this amount, in the same currency.
    ///
    /// Fails with [`MoneyError::InvalidAmount`] if `percent` is not finite.
    pub fn percentage(&self, percent: f64) -> Result<Money> {
        let percent = decimal::from_f64(percent)?;
        let scaled = checked(self.amount().checked_mul(percent), "percentage")?;
        let share = checked(scaled.checked_div(Decimal::ONE_HUNDRED), "percentage")?;
        Ok(Money::from_decimal(share, self.currency().clone()))
    }

    /// Signed difference `self - other` as a plain decimal.
    pub fn delta(&self, other: impl Operand) -> Result<Decimal> {
        let other = compatible_operand(self, &other)?;
        let difference = checked(self.amount().checked_sub(other.amount()), "delta")?;
        Ok(difference.normalize())
    }

    // --- Aliases ---

    pub fn plus(&self, other: impl Operand) -> Result<Money> {
        self.add(other)
    }

    pub fn minus(&self, other: impl Operand) -> Result<Money> {
        self.subtract(other)
    }

    pub fn times(&self, other: impl Operand) -> Result<Money> {
        self.multiply(other)
    }

    pub fn divided_by(&self, other: impl Operand) -> Result<Money> {
        self.divide(other)
    }
}
