//! File formats supported by import and export.

use crate::error::TransferError;
use std::fmt;
use std::str::FromStr;

/// Serialization format of an exported or uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum TransferFormat {
    Json,
    Csv,
}

impl TransferFormat {
    /// MIME type of the serialized file.
    pub fn content_type(&self) -> &'static str {
        match self {
            TransferFormat::Json => "application/json",
            TransferFormat::Csv => "text/csv",
        }
    }

    /// Suggested download name.
    pub fn file_name(&self) -> &'static str {
        match self {
            TransferFormat::Json => "contacts.json",
            TransferFormat::Csv => "contacts.csv",
        }
    }

    /// Short lower-case name, used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferFormat::Json => "json",
            TransferFormat::Csv => "csv",
        }
    }
}

impl FromStr for TransferFormat {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(TransferFormat::Json),
            "csv" => Ok(TransferFormat::Csv),
            other => Err(TransferError::BadRequest(format!(
                "Unsupported format: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for TransferFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exported file ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub bytes: Vec<u8>,
    pub format: TransferFormat,
}

impl ExportedFile {
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }
}
