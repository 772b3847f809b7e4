//! Data models for contacts and their owners.
//!
//! - [`contact`]: persistence shape held by the store
//! - [`transfer`]: serialization-ready shapes used by JSON import/export
//! - [`user`]: the owning account

pub mod contact;
pub mod transfer;
pub mod user;

pub use contact::{Contact, ContactEmail, ContactPhone};
pub use transfer::{
    ContactRequest, ContactResponse, EmailRequest, EmailResponse, PhoneRequest, PhoneResponse,
};
pub use user::User;
