//! Contact model in the shape the store keeps it.

use crate::domain::{ContactId, EmailType, PhoneType, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Email address entry owned by a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactEmail {
    /// Assigned on commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The address, stored as given
    pub email: String,

    #[serde(rename = "type")]
    pub email_type: EmailType,
}

/// Phone number entry owned by a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPhone {
    /// Assigned on commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The number, stored as given
    pub phone_number: String,

    #[serde(rename = "type")]
    pub phone_type: PhoneType,
}

/// A contact owned by exactly one user.
///
/// Sub-records are held by value in order; there are no back-references, so
/// removing a contact removes its emails and phones with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, present once persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,

    /// Owning user, fixed at construction
    pub owner: UserId,

    pub first_name: String,

    pub last_name: String,

    /// Job title, absent rather than empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub emails: Vec<ContactEmail>,

    #[serde(default)]
    pub phones: Vec<ContactPhone>,

    /// When the contact was created (assigned by the store)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the contact was last updated (assigned by the store)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContactEmail {
    /// Create an unpersisted email entry.
    pub fn new(email: impl Into<String>, email_type: EmailType) -> Self {
        Self {
            id: None,
            email: email.into(),
            email_type,
        }
    }
}

impl ContactPhone {
    /// Create an unpersisted phone entry.
    pub fn new(phone_number: impl Into<String>, phone_type: PhoneType) -> Self {
        Self {
            id: None,
            phone_number: phone_number.into(),
            phone_type,
        }
    }
}

impl Contact {
    /// Create a new, unpersisted contact with no title, emails or phones.
    pub fn new(owner: UserId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            owner,
            first_name: first_name.into(),
            last_name: last_name.into(),
            title: None,
            emails: Vec::new(),
            phones: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append an email entry.
    pub fn with_email(mut self, email: impl Into<String>, email_type: EmailType) -> Self {
        self.emails.push(ContactEmail::new(email, email_type));
        self
    }

    /// Append a phone entry.
    pub fn with_phone(mut self, phone: impl Into<String>, phone_type: PhoneType) -> Self {
        self.phones.push(ContactPhone::new(phone, phone_type));
        self
    }

    /// Whether the store has assigned this contact an ID.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
