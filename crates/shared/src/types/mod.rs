//! Common types used across the application.

pub mod account_type;
pub mod amount;

#[cfg(test)]
mod amount_props;

pub use account_type::AccountType;
pub use amount::{Amount, AmountError};
