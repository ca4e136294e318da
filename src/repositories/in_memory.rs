//! In-memory contact repository.

use crate::domain::{PhoneNumber, ValidationError};
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use tracing::{debug, warn};

/// Contact repository backed by an insertion-ordered `Vec`.
///
/// Invariant: no two stored contacts share a phone number. The collection
/// is only mutated through [`ContactRepository::add_contact`] and
/// [`ContactRepository::remove_contact_by_phone_number`], both of which
/// leave it unchanged on any validation failure.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
}

impl InMemoryContactRepository {
    /// Create a new, empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the repository holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl ContactRepository for InMemoryContactRepository {
    /// Append a contact.
    ///
    /// Validation, in order: non-empty name, non-empty phone number, no
    /// stored contact with the same phone number. The phone number's
    /// format is not checked here; only the key-based operations require
    /// a well-formed number.
    fn add_contact(&mut self, contact: Contact) -> ContactResult<()> {
        if contact.name.is_empty() {
            warn!("rejected contact with empty name");
            return Err(ValidationError::EmptyName.into());
        }
        if contact.phone_number.is_empty() {
            warn!(name = %contact.name, "rejected contact with empty phone number");
            return Err(ValidationError::EmptyPhoneNumber.into());
        }
        if self
            .contacts
            .iter()
            .any(|c| c.phone_number == contact.phone_number)
        {
            warn!(phone_number = %contact.phone_number, "rejected duplicate phone number");
            return Err(ContactError::DuplicatePhoneNumber(contact.phone_number));
        }

        debug!(name = %contact.name, phone_number = %contact.phone_number, "added contact");
        self.contacts.push(contact);
        Ok(())
    }

    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Look up contacts by phone number.
    ///
    /// Only digit content is validated here; an all-digit key of any
    /// length (including the empty string) is a legal query that simply
    /// misses. At most one contact can match, by the uniqueness invariant.
    fn contacts_by_phone_number(&self, phone_number: &str) -> ContactResult<Vec<Contact>> {
        PhoneNumber::require_numeric(phone_number)?;

        Ok(self
            .contacts
            .iter()
            .filter(|c| c.phone_number == phone_number)
            .cloned()
            .collect())
    }

    /// Look up contacts by exact name.
    fn contacts_by_name(&self, name: &str) -> ContactResult<Vec<Contact>> {
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        Ok(self
            .contacts
            .iter()
            .filter(|c| c.name == name)
            .cloned()
            .collect())
    }

    /// Remove the contact with the given phone number.
    ///
    /// The key must be a well-formed [`PhoneNumber`]: wrong length is
    /// reported before non-digit content, so a 13-digit string is an
    /// invalid number while a 10-letter string is not-a-number.
    fn remove_contact_by_phone_number(&mut self, phone_number: &str) -> ContactResult<()> {
        let phone = PhoneNumber::parse(phone_number)?;

        let position = self
            .contacts
            .iter()
            .position(|c| c.phone_number == phone.as_str())
            .ok_or(ContactError::NotFound)?;

        let removed = self.contacts.remove(position);
        debug!(name = %removed.name, phone_number = %removed.phone_number, "removed contact");
        Ok(())
    }
}
