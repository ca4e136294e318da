//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on a contact repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Input failed domain validation; the message is the validation
    /// error's own, preserved verbatim.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A contact with the same phone number is already stored
    #[error("Contact with phone number {0} already exists")]
    DuplicatePhoneNumber(String),

    /// No contact matched a well-formed phone number
    #[error("No contact found")]
    NotFound,
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;
