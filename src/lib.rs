//! Contact Book - an in-memory contact repository with validated operations.
//!
//! This library provides a small, synchronous contact store: a flat,
//! insertion-ordered collection of name/email/phone records with add,
//! list, lookup-by-name, lookup-by-phone, and remove-by-phone operations.
//! Every operation validates its input up front and reports failures with
//! stable, human-readable messages.
//!
//! # Architecture
//!
//! - **models**: The `Contact` record
//! - **domain**: Type-safe value objects with construction-time validation
//! - **error**: Custom error types for precise error handling
//! - **repositories**: The `ContactRepository` trait and its in-memory implementation

pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use domain::{PhoneNumber, ValidationError};
pub use error::{ContactError, ContactResult};
pub use models::Contact;
pub use repositories::{ContactRepository, InMemoryContactRepository};
