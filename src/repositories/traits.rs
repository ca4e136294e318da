use crate::error::ContactResult;
use crate::models::Contact;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval, enabling
/// different implementations (in-memory, mock). All operations are
/// synchronous; implementations exposed to concurrent callers are
/// expected to be wrapped in the caller's own lock.
pub trait ContactRepository {
    /// Append a contact, validating name, phone number, and uniqueness.
    fn add_contact(&mut self, contact: Contact) -> ContactResult<()>;

    /// All contacts in insertion order.
    fn contacts(&self) -> &[Contact];

    /// Contacts whose phone number equals the argument.
    fn contacts_by_phone_number(&self, phone_number: &str) -> ContactResult<Vec<Contact>>;

    /// Contacts whose name equals the argument exactly.
    fn contacts_by_name(&self, name: &str) -> ContactResult<Vec<Contact>>;

    /// Remove the contact with the given phone number.
    fn remove_contact_by_phone_number(&mut self, phone_number: &str) -> ContactResult<()>;
}
