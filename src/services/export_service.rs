//! Contact export service.
//!
//! Serializes every contact a user owns to JSON or CSV.

use super::format::{ExportedFile, TransferFormat};
use crate::codec::csv_format;
use crate::domain::UserId;
use crate::error::{TransferError, TransferResult};
use crate::mapper;
use crate::models::ContactResponse;
use crate::observability::{Timer, TransferMetrics};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Export service trait.
#[async_trait]
pub trait ContactExportService: Send + Sync {
    /// Export a user's contacts as a JSON array.
    async fn export_as_json(&self, user_id: UserId) -> TransferResult<Vec<u8>>;

    /// Export a user's contacts as a CSV table with a header row.
    async fn export_as_csv(&self, user_id: UserId) -> TransferResult<Vec<u8>>;

    /// Export in the given format, returning bytes with their content type.
    async fn export(&self, user_id: UserId, format: TransferFormat) -> TransferResult<ExportedFile> {
        let bytes = match format {
            TransferFormat::Json => self.export_as_json(user_id).await?,
            TransferFormat::Csv => self.export_as_csv(user_id).await?,
        };
        Ok(ExportedFile { bytes, format })
    }
}

/// Default implementation of ContactExportService.
pub struct ContactExportServiceImpl {
    contact_repo: Arc<dyn ContactRepository>,
    metrics: TransferMetrics,
}

impl ContactExportServiceImpl {
    /// Create a new export service.
    pub fn new(contact_repo: Arc<dyn ContactRepository>, metrics: TransferMetrics) -> Self {
        Self {
            contact_repo,
            metrics,
        }
    }

    /// Read the user's contacts as one snapshot and map them for output.
    async fn load(&self, user_id: UserId) -> TransferResult<Vec<ContactResponse>> {
        let contacts = self.contact_repo.find_by_user(user_id).await.map_err(|e| {
            tracing::error!(user_id = %user_id, "Failed to load contacts for export: {}", e);
            e
        })?;

        Ok(contacts.iter().map(mapper::to_response).collect())
    }
}

#[async_trait]
impl ContactExportService for ContactExportServiceImpl {
    async fn export_as_json(&self, user_id: UserId) -> TransferResult<Vec<u8>> {
        tracing::info!(user_id = %user_id, "Exporting contacts as JSON");
        let timer = Timer::new("export_json");

        let responses = self.load(user_id).await?;
        let bytes = serde_json::to_vec(&responses).map_err(|e| {
            tracing::error!(user_id = %user_id, "Error exporting contacts as JSON: {}", e);
            TransferError::Export(format!("Failed to export contacts as JSON: {}", e))
        })?;

        self.metrics
            .track_export("json", responses.len(), timer.finish());
        tracing::info!("Successfully exported {} contacts as JSON", responses.len());
        Ok(bytes)
    }

    async fn export_as_csv(&self, user_id: UserId) -> TransferResult<Vec<u8>> {
        tracing::info!(user_id = %user_id, "Exporting contacts as CSV");
        let timer = Timer::new("export_csv");

        let responses = self.load(user_id).await?;
        let bytes = csv_format::write_contacts(&responses).map_err(|e| {
            tracing::error!(user_id = %user_id, "Error exporting contacts as CSV: {}", e);
            e
        })?;

        self.metrics
            .track_export("csv", responses.len(), timer.finish());
        tracing::info!("Successfully exported {} contacts as CSV", responses.len());
        Ok(bytes)
    }
}
