//! Owning user account.

use crate::domain::UserId;
use serde::{Deserialize, Serialize};

/// A user that owns contacts.
///
/// Only the fields the import path needs to resolve an owner are kept here;
/// credentials and sessions live with the authentication layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl User {
    /// Create a user with just an ID and username.
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            first_name: None,
            last_name: None,
        }
    }
}
