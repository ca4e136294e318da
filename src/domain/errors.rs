//! Domain validation errors.
//!
//! The message text of each variant is part of the repository contract:
//! callers assert on it, so it must not change.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is empty.
    EmptyPhoneNumber,

    /// The provided phone number does not have the expected length.
    WrongLength(String),

    /// The provided phone number contains non-digit characters.
    NotNumeric(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name is null or empty."),
            Self::EmptyPhoneNumber => write!(f, "Phone number is null or empty."),
            Self::WrongLength(_) => write!(f, "Invalid phone number"),
            Self::NotNumeric(_) => write!(f, "Phone number is not a number"),
        }
    }
}

impl std::error::Error for ValidationError {}
