//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain identifiers and the
//! closed enumerations used to tag email addresses and phone numbers.

pub mod email;
pub mod errors;
pub mod ids;
pub mod phone;

pub use email::EmailType;
pub use errors::ValidationError;
pub use ids::{ContactId, UserId};
pub use phone::PhoneType;

use std::fmt;
use std::str::FromStr;

/// A closed set of type tags attached to a multi-valued contact entry.
///
/// Implemented by [`EmailType`] and [`PhoneType`]. `Display` yields the
/// canonical upper-case tag and `FromStr` accepts exactly that tag.
pub trait EntryType:
    Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = ValidationError>
{
}

impl EntryType for EmailType {}
impl EntryType for PhoneType {}
