//! Contact import service.
//!
//! Parses an uploaded JSON array or CSV table, binds every contact to the
//! calling user, and persists the batch in one unit of work. A structurally
//! broken upload fails before anything is written; odd cells inside a valid
//! CSV row are absorbed by the grammar's fallback rules.

use super::format::TransferFormat;
use crate::codec::csv_format;
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::domain::UserId;
use crate::error::{TransferError, TransferResult};
use crate::mapper;
use crate::models::{Contact, ContactRequest, ContactResponse, User};
use crate::observability::{Timer, TransferMetrics};
use crate::repositories::{ContactRepository, UserRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Import service trait.
#[async_trait]
pub trait ContactImportService: Send + Sync {
    /// Import a JSON array of contact-creation payloads for `user_id`.
    async fn import_from_json(
        &self,
        user_id: UserId,
        bytes: &[u8],
    ) -> TransferResult<Vec<ContactResponse>>;

    /// Import a CSV table (exporter layout) for `user_id`.
    async fn import_from_csv(
        &self,
        user_id: UserId,
        bytes: &[u8],
    ) -> TransferResult<Vec<ContactResponse>>;

    /// Validate the upload itself, then import it in the given format.
    async fn import(
        &self,
        user_id: UserId,
        format: TransferFormat,
        bytes: &[u8],
    ) -> TransferResult<Vec<ContactResponse>>;
}

/// Default implementation of ContactImportService.
pub struct ContactImportServiceImpl {
    contact_repo: Arc<dyn ContactRepository>,
    user_repo: Arc<dyn UserRepository>,
    metrics: TransferMetrics,
    max_upload_bytes: usize,
}

impl ContactImportServiceImpl {
    /// Create a new import service with the default upload limit.
    pub fn new(
        contact_repo: Arc<dyn ContactRepository>,
        user_repo: Arc<dyn UserRepository>,
        metrics: TransferMetrics,
    ) -> Self {
        Self {
            contact_repo,
            user_repo,
            metrics,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Override the maximum accepted upload size.
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    /// Reject uploads that are empty or over the size limit.
    fn validate_upload(&self, bytes: &[u8]) -> TransferResult<()> {
        if bytes.is_empty() {
            return Err(TransferError::BadRequest("File is empty".to_string()));
        }
        if bytes.len() > self.max_upload_bytes {
            return Err(TransferError::BadRequest(format!(
                "File too large ({} bytes, max {})",
                bytes.len(),
                self.max_upload_bytes
            )));
        }
        Ok(())
    }

    async fn resolve_user(&self, user_id: UserId) -> TransferResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| TransferError::NotFound(format!("User not found with id: {}", user_id)))
    }

    /// Persist the batch atomically and map it back in input order.
    async fn persist(&self, contacts: Vec<Contact>) -> TransferResult<Vec<ContactResponse>> {
        let saved = self.contact_repo.save_all(contacts).await?;
        Ok(saved.iter().map(mapper::to_response).collect())
    }

    async fn json_contacts(
        &self,
        user_id: UserId,
        bytes: &[u8],
    ) -> TransferResult<Vec<ContactResponse>> {
        let user = self.resolve_user(user_id).await?;

        let requests: Vec<ContactRequest> = serde_json::from_slice(bytes).map_err(|e| {
            TransferError::BadRequest(format!("Failed to import contacts from JSON: {}", e))
        })?;

        let contacts = requests
            .into_iter()
            .map(|request| mapper::from_request(user.id, request))
            .collect();

        self.persist(contacts).await
    }

    async fn csv_contacts(
        &self,
        user_id: UserId,
        bytes: &[u8],
    ) -> TransferResult<Vec<ContactResponse>> {
        let user = self.resolve_user(user_id).await?;
        let table = csv_format::read_contacts(bytes)?;

        if table.degraded_cells > 0 || table.dropped_segments > 0 {
            tracing::warn!(
                user_id = %user_id,
                degraded = table.degraded_cells,
                dropped = table.dropped_segments,
                "CSV import contained unrecognised email/phone entries"
            );
            self.metrics
                .track_cell_anomalies(table.degraded_cells, table.dropped_segments);
        }

        let contacts = table
            .rows
            .into_iter()
            .map(|row| mapper::from_csv_row(user.id, row))
            .collect();

        self.persist(contacts).await
    }

    /// Record the outcome of an import and log it.
    fn finish(
        &self,
        format: TransferFormat,
        user_id: UserId,
        timer: Timer,
        result: TransferResult<Vec<ContactResponse>>,
    ) -> TransferResult<Vec<ContactResponse>> {
        match &result {
            Ok(imported) => {
                self.metrics
                    .track_import(format.as_str(), imported.len(), timer.finish());
                tracing::info!(
                    user_id = %user_id,
                    "Successfully imported {} contacts from {}",
                    imported.len(),
                    format
                );
            }
            Err(e) => {
                self.metrics.track_import_failure(format.as_str());
                tracing::error!(user_id = %user_id, "Error importing contacts from {}: {}", format, e);
            }
        }
        result
    }
}

#[async_trait]
impl ContactImportService for ContactImportServiceImpl {
    async fn import_from_json(
        &self,
        user_id: UserId,
        bytes: &[u8],
    ) -> TransferResult<Vec<ContactResponse>> {
        tracing::info!(user_id = %user_id, "Importing contacts from JSON");
        let timer = Timer::new("import_json");

        let result = self.json_contacts(user_id, bytes).await;
        self.finish(TransferFormat::Json, user_id, timer, result)
    }

    async fn import_from_csv(
        &self,
        user_id: UserId,
        bytes: &[u8],
    ) -> TransferResult<Vec<ContactResponse>> {
        tracing::info!(user_id = %user_id, "Importing contacts from CSV");
        let timer = Timer::new("import_csv");

        let result = self.csv_contacts(user_id, bytes).await;
        self.finish(TransferFormat::Csv, user_id, timer, result)
    }

    async fn import(
        &self,
        user_id: UserId,
        format: TransferFormat,
        bytes: &[u8],
    ) -> TransferResult<Vec<ContactResponse>> {
        if let Err(e) = self.validate_upload(bytes) {
            tracing::warn!(user_id = %user_id, "Rejected {} upload: {}", format, e);
            self.metrics.track_import_failure(format.as_str());
            return Err(e);
        }

        match format {
            TransferFormat::Json => self.import_from_json(user_id, bytes).await,
            TransferFormat::Csv => self.import_from_csv(user_id, bytes).await,
        }
    }
}
