//! EmailType enumeration.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type tag attached to a contact's email address.
///
/// Serialized as the upper-case tag (`"WORK"`, `"PERSONAL"`, `"OTHER"`), both
/// in JSON payloads and inside the CSV `Emails` cell.
///
/// # Example
///
/// ```
/// use circle_contacts::domain::EmailType;
///
/// let kind: EmailType = "WORK".parse().unwrap();
/// assert_eq!(kind, EmailType::Work);
/// assert_eq!(kind.to_string(), "WORK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmailType {
    Work,
    Personal,
    Other,
}

impl EmailType {
    /// All members, in declaration order.
    pub const ALL: [EmailType; 3] = [EmailType::Work, EmailType::Personal, EmailType::Other];

    /// The canonical upper-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailType::Work => "WORK",
            EmailType::Personal => "PERSONAL",
            EmailType::Other => "OTHER",
        }
    }
}

impl Default for EmailType {
    fn default() -> Self {
        EmailType::Personal
    }
}

impl FromStr for EmailType {
    type Err = ValidationError;

    /// Parse an exact upper-case tag. Callers normalise case first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmailType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownType {
                kind: "email",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for EmailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
