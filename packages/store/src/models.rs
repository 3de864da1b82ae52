//! # Domain models for contacts
//!
//! Defines the records held by [`crate::ContactStore`]. These types are
//! `Serialize + Deserialize` so they can be logged or exported as JSON, but the
//! store itself keeps them in memory only.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`ContactId`] | Generated identifier (UUID v4 string), unique within a store and never reassigned. |
//! | [`ContactStatus`] | `Active` or `Inactive`, serialised as `"active"` / `"inactive"` (also the radio value used by the forms). |
//! | [`Contact`] | A stored record: identifier plus the mutable fields. |
//! | [`ContactDraft`] | The mutable fields alone, as collected by the add form and the row editor. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a stored contact.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Active or inactive classification of a contact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Active,
    Inactive,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 2] = [ContactStatus::Active, ContactStatus::Inactive];

    /// The other status.
    pub fn toggled(self) -> Self {
        match self {
            ContactStatus::Active => ContactStatus::Inactive,
            ContactStatus::Inactive => ContactStatus::Active,
        }
    }

    pub fn is_active(self) -> bool {
        self == ContactStatus::Active
    }

    /// Human-readable label: "Active" / "Inactive".
    pub fn label(self) -> &'static str {
        match self {
            ContactStatus::Active => "Active",
            ContactStatus::Inactive => "Inactive",
        }
    }

    /// Form value: "active" / "inactive".
    pub fn value(self) -> &'static str {
        match self {
            ContactStatus::Active => "active",
            ContactStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a form value is not a known status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contact status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for ContactStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ContactStatus::Active),
            "inactive" => Ok(ContactStatus::Inactive),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// A contact record held by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: ContactStatus,
}

impl Contact {
    /// Build a record from a draft under the given identifier.
    pub fn from_draft(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            status: draft.status,
        }
    }

    /// Copy of this record with every mutable field taken from `draft`.
    pub fn with_draft(&self, draft: ContactDraft) -> Self {
        Self::from_draft(self.id.clone(), draft)
    }
}

/// Mutable fields of a contact. Nothing is validated; empty strings are fine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: ContactStatus,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        status: ContactStatus,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            status,
        }
    }
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            status: contact.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_toggle_and_labels() {
        assert_eq!(ContactStatus::Active.toggled(), ContactStatus::Inactive);
        assert_eq!(ContactStatus::Inactive.toggled(), ContactStatus::Active);
        assert_eq!(ContactStatus::default(), ContactStatus::Active);
        assert_eq!(ContactStatus::Inactive.label(), "Inactive");
        assert_eq!(ContactStatus::Inactive.value(), "inactive");
    }

    #[test]
    fn test_status_from_form_value() {
        assert_eq!("active".parse::<ContactStatus>(), Ok(ContactStatus::Active));
        assert_eq!(" Inactive ".parse::<ContactStatus>(), Ok(ContactStatus::Inactive));
        assert!("archived".parse::<ContactStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ContactStatus::Inactive).unwrap();
        assert_eq!(json, "\"inactive\"");
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = ContactId::generate();
        let b = ContactId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_with_draft_keeps_id() {
        let id = ContactId::from("c-1");
        let contact = Contact::from_draft(id.clone(), ContactDraft::default());
        let edited = contact.with_draft(ContactDraft::new(
            "Bo",
            "bo@x.com",
            "123",
            ContactStatus::Inactive,
        ));
        assert_eq!(edited.id, id);
        assert_eq!(edited.name, "Bo");
        assert_eq!(ContactDraft::from(&edited).status, ContactStatus::Inactive);
    }
}
