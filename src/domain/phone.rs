//! PhoneType enumeration.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type tag attached to a contact's phone number.
///
/// Unlike [`EmailType`](super::EmailType) this set includes `HOME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhoneType {
    Work,
    Home,
    Personal,
    Other,
}

impl PhoneType {
    /// All members, in declaration order.
    pub const ALL: [PhoneType; 4] = [
        PhoneType::Work,
        PhoneType::Home,
        PhoneType::Personal,
        PhoneType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneType::Work => "WORK",
            PhoneType::Home => "HOME",
            PhoneType::Personal => "PERSONAL",
            PhoneType::Other => "OTHER",
        }
    }
}

impl Default for PhoneType {
    fn default() -> Self {
        PhoneType::Personal
    }
}

impl FromStr for PhoneType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhoneType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownType {
                kind: "phone",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
