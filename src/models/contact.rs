//! Contact model representing a person in the contact book.

use serde::{Deserialize, Serialize};

/// A contact in the book.
///
/// All fields are plain text. The record itself carries no validation;
/// the repository validates `name` and `phone_number` at the operation
/// boundary, and `email` is unconstrained free text. An empty field plays
/// the role a null reference would in other systems.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Contact {
    /// Full name of the contact
    pub name: String,

    /// Email address (free text, not validated)
    pub email: String,

    /// Phone number, the contact's unique key within a repository
    pub phone_number: String,
}

impl Contact {
    /// Create a new contact from its three fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_new() {
        let contact = Contact::new("Rakesh", "rakesh@gmail.com", "1234567890");
        assert_eq!(contact.name, "Rakesh");
        assert_eq!(contact.email, "rakesh@gmail.com");
        assert_eq!(contact.phone_number, "1234567890");
    }

    #[test]
    fn test_contact_serialization() {
        let contact = Contact::new("Rakesh", "rakesh@gmail.com", "1234567890");
        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains("\"name\":\"Rakesh\""));
        assert!(json.contains("\"phone_number\":\"1234567890\""));
    }

    #[test]
    fn test_contact_deserialization_defaults_missing_fields() {
        let json = r#"{"name":"Jane"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.name, "Jane");
        assert!(contact.email.is_empty());
        assert!(contact.phone_number.is_empty());
    }
}
