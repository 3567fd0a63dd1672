//! Record operations as exposed to callers: validation, id parsing, and
//! logging around a [`RecordStore`].

use std::sync::Arc;

use crate::error::CoreError;
use crate::record::{CreateRecord, MovieRecord, UpdateRecord};
use crate::store::{record_not_found, RecordStore};
use crate::types::RecordId;

/// Cheaply cloneable handle to the record operations.
#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn RecordStore>,
}

impl RecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new record. Nothing is written on failure.
    pub async fn create(&self, input: CreateRecord) -> Result<MovieRecord, CoreError> {
        let record = input.validate()?;
        let created = self.store.create(record).await?;
        tracing::debug!(id = %created.id, title = %created.title, "Movie record created");
        Ok(created)
    }

    pub async fn list_all(&self) -> Result<Vec<MovieRecord>, CoreError> {
        self.store.list_all().await
    }

    /// Apply the provided fields of `input` to the record with `id`.
    ///
    /// A malformed id is reported as not found.
    pub async fn update(&self, id: &str, input: UpdateRecord) -> Result<MovieRecord, CoreError> {
        let id = parse_record_id(id)?;
        let changes = input.validate()?;
        let updated = self.store.update(id, changes).await?;
        tracing::debug!(%id, "Movie record updated");
        Ok(updated)
    }

    /// Hard-delete the record with `id`. Returns the parsed id.
    pub async fn delete(&self, id: &str) -> Result<RecordId, CoreError> {
        let id = parse_record_id(id)?;
        self.store.delete(id).await?;
        tracing::debug!(%id, "Movie record deleted");
        Ok(id)
    }

    /// Whether the backing store is reachable.
    pub async fn is_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Record store health check failed");
                false
            }
        }
    }
}

/// Parse an opaque path id. Anything that is not a UUID cannot name a
/// record, so it maps to [`CoreError::NotFound`].
pub fn parse_record_id(raw: &str) -> Result<RecordId, CoreError> {
    raw.trim().parse().map_err(|_| record_not_found(raw))
}
