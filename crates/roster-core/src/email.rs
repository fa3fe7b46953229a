//! Validated participant email addresses.
//!
//! A [`ParticipantEmail`] can only be built from a syntactically valid
//! address. Construction trims surrounding whitespace and lowercases the
//! address so that roster membership checks are case-insensitive.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::RosterError;

/// A normalized, syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    /// Parse and normalize an email address.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidEmail`] if the trimmed input is empty
    /// or fails email syntax validation.
    pub fn parse(raw: &str) -> Result<Self, RosterError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() || !normalized.validate_email() {
            return Err(RosterError::InvalidEmail(raw.to_owned()));
        }
        Ok(Self(normalized))
    }

    /// Borrow the normalized address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ParticipantEmail {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ParticipantEmail> for String {
    fn from(email: ParticipantEmail) -> Self {
        email.0
    }
}

impl AsRef<str> for ParticipantEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        let email = ParticipantEmail::parse("test@example.com");
        assert_eq!(
            email.map(|e| e.as_str().to_owned()),
            Ok(String::from("test@example.com"))
        );
    }

    #[test]
    fn trims_and_lowercases() {
        let email = ParticipantEmail::parse("  Michael@Mergington.EDU ");
        assert_eq!(
            email.map(String::from),
            Ok(String::from("michael@mergington.edu"))
        );
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in ["", "   ", "not-an-email", "a@@b.com", "@example.com", "user@"] {
            assert_eq!(
                ParticipantEmail::parse(raw),
                Err(RosterError::InvalidEmail(raw.to_owned())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let email = ParticipantEmail::parse("emma@mergington.edu").unwrap();
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json, serde_json::json!("emma@mergington.edu"));
    }

    #[test]
    fn deserialization_validates() {
        let bad: Result<ParticipantEmail, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
        let good: Result<ParticipantEmail, _> = serde_json::from_str("\"Ok@Example.com\"");
        assert_eq!(good.ok().map(String::from), Some(String::from("ok@example.com")));
    }
}
