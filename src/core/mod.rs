pub mod currency;
pub mod decimal;
pub mod error;
pub mod money;
pub mod operand;
pub mod parts;
