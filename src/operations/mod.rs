pub mod arithmetic;
pub mod comparison;
pub mod conversion;
pub mod guard;
