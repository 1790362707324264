//! Contact model types.

use serde::{Deserialize, Serialize};

/// Unique identifier for a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl ContactId {
    /// Create a new contact ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A phonebook entry stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier, assigned by the store on creation.
    pub id: ContactId,
    /// Display name, unique across all contacts (case-insensitive).
    pub name: String,
    /// Phone number. No format is enforced.
    pub phone: String,
}

impl Contact {
    /// Checks if the contact name contains a fragment (case-insensitive).
    #[must_use]
    pub fn matches(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

/// Contact data that has not been persisted yet (no ID assigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone: String,
}

impl ContactDraft {
    /// Creates a new draft.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_fragment() {
        let contact = Contact {
            id: ContactId::new(1),
            name: "Anderson".to_string(),
            phone: "555-0100".to_string(),
        };
        assert!(contact.matches("and"));
        assert!(contact.matches("AND"));
        assert!(contact.matches("son"));
        assert!(!contact.matches("ana"));
    }
}
