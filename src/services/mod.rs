//! Application service layer.
//!
//! Services orchestrate the codecs, the record mapper and the repositories.
//! They are the boundary where failures are logged and metrics recorded.

mod export_service;
mod format;
mod import_service;

pub use export_service::{ContactExportService, ContactExportServiceImpl};
pub use format::{ExportedFile, TransferFormat};
pub use import_service::{ContactImportService, ContactImportServiceImpl};
