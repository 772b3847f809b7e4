//! Circle Contacts - bulk import/export of personal contacts.
//!
//! Contacts move in and out of a user's address book as a JSON array or as a
//! CSV table whose email and phone columns pack several typed entries into a
//! single cell (`"a@x.example (WORK); b@y.example (PERSONAL)"`).
//!
//! # Architecture
//!
//! - **domain**: Identifiers and the email/phone type enumerations
//! - **models**: Stored contact shape and the JSON transfer shapes
//! - **codec**: The cell grammar and the CSV table layout
//! - **mapper**: Pure conversions between stored and transfer shapes
//! - **repositories**: Contact/user persistence with atomic batch writes
//! - **services**: Export and import engines
//! - **observability**: Transfer counters and timers
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod mapper;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{ContactId, EmailType, PhoneType, UserId};
pub use error::{ConfigError, TransferError, TransferResult};
pub use models::{Contact, ContactRequest, ContactResponse, User};
pub use observability::TransferMetrics;
pub use repositories::{ContactStore, StoreContactRepository, StoreUserRepository};
pub use services::{
    ContactExportService, ContactExportServiceImpl, ContactImportService,
    ContactImportServiceImpl, ExportedFile, TransferFormat,
};
