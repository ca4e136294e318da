//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Expected number of digits in a valid phone number.
pub const PHONE_NUMBER_LENGTH: usize = 10;

/// Matches strings made up entirely of ASCII digits. The empty string
/// matches too; emptiness is checked separately where it matters.
static ALL_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*$").expect("digit pattern is valid"));

/// A type-safe wrapper for phone numbers used as lookup keys.
///
/// This ensures that phone numbers are validated at construction time:
/// exactly [`PHONE_NUMBER_LENGTH`] ASCII digits, nothing else.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// Checked in this order:
    ///
    /// - Must be exactly [`PHONE_NUMBER_LENGTH`] characters long
    /// - Must contain only ASCII digits
    ///
    /// The order is observable: a 13-character digit string fails with
    /// [`ValidationError::WrongLength`], while a 10-character alphabetic
    /// string fails with [`ValidationError::NotNumeric`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::WrongLength` or `ValidationError::NotNumeric`.
    pub fn parse(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if phone.len() != PHONE_NUMBER_LENGTH {
            return Err(ValidationError::WrongLength(phone));
        }

        Self::require_numeric(&phone)?;

        Ok(Self(phone))
    }

    /// Check that a candidate phone number contains only digits.
    ///
    /// This is the lenient check used by the lookup path, which accepts
    /// any all-digit string regardless of length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotNumeric` if any character is not an
    /// ASCII digit.
    pub fn require_numeric(phone: &str) -> Result<(), ValidationError> {
        if !ALL_DIGITS.is_match(phone) {
            return Err(ValidationError::NotNumeric(phone.to_string()));
        }
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::parse("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_rejects_wrong_length() {
        assert_eq!(
            PhoneNumber::parse("1234567890123"),
            Err(ValidationError::WrongLength("1234567890123".to_string()))
        );
        assert_eq!(
            PhoneNumber::parse("123"),
            Err(ValidationError::WrongLength("123".to_string()))
        );
        assert_eq!(
            PhoneNumber::parse(""),
            Err(ValidationError::WrongLength(String::new()))
        );
    }

    #[test]
    fn test_phone_length_checked_before_content() {
        // Wrong length wins even when the content is also non-numeric.
        assert_eq!(
            PhoneNumber::parse("ABC"),
            Err(ValidationError::WrongLength("ABC".to_string()))
        );
    }

    #[test]
    fn test_phone_rejects_non_numeric_of_correct_length() {
        assert_eq!(
            PhoneNumber::parse("123ABCDERT"),
            Err(ValidationError::NotNumeric("123ABCDERT".to_string()))
        );
        assert_eq!(
            PhoneNumber::parse("123-456-78"),
            Err(ValidationError::NotNumeric("123-456-78".to_string()))
        );
    }

    #[test]
    fn test_require_numeric() {
        assert!(PhoneNumber::require_numeric("1234567890").is_ok());
        assert!(PhoneNumber::require_numeric("123").is_ok());
        // Vacuously numeric; the lookup path treats this as a miss, not an error.
        assert!(PhoneNumber::require_numeric("").is_ok());
        assert_eq!(
            PhoneNumber::require_numeric("ACBCEDTDGT"),
            Err(ValidationError::NotNumeric("ACBCEDTDGT".to_string()))
        );
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::parse("9876543210").unwrap();
        assert_eq!(format!("{}", phone), "9876543210");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::parse("1234567890").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"1234567890\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: PhoneNumber = serde_json::from_str("\"1234567890\"").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"123ABCDERT\"");
        assert!(result.is_err());
    }
}
