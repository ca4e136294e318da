//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! phone numbers. These value objects provide validation at construction
//! time and prevent invalid data from being used as lookup keys.

pub mod errors;
pub mod phone;

pub use errors::ValidationError;
pub use phone::PhoneNumber;
