//! Transfer shapes for contacts.
//!
//! These are the flat, serialization-ready representations exchanged with
//! callers: [`ContactResponse`] is what exports and imports return,
//! [`ContactRequest`] is the element shape accepted by a JSON import.
//! Field names are camelCase and timestamps are ISO-8601 strings.

use crate::domain::{ContactId, EmailType, PhoneType, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Email entry as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailResponse {
    pub id: Option<u64>,
    pub email: String,
    #[serde(rename = "type")]
    pub email_type: EmailType,
}

/// Phone entry as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhoneResponse {
    pub id: Option<u64>,
    pub phone_number: String,
    #[serde(rename = "type")]
    pub phone_type: PhoneType,
}

/// A contact as returned by export and import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: Option<ContactId>,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub emails: Vec<EmailResponse>,
    pub phones: Vec<PhoneResponse>,
    pub user_id: UserId,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Email entry in a contact-creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailRequest {
    pub email: String,
    #[serde(rename = "type")]
    pub email_type: EmailType,
}

/// Phone entry in a contact-creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhoneRequest {
    pub phone_number: String,
    #[serde(rename = "type")]
    pub phone_type: PhoneType,
}

/// Contact-creation payload, one element of a JSON import array.
///
/// There is no owner field: any `userId`/`owner` key present in an upload is
/// ignored and the owner comes from the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<EmailRequest>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<PhoneRequest>>,
}
