//! In-process [`RecordStore`] backed by a `Vec` behind a `RwLock`.
//!
//! Used when `STORE_BACKEND=memory` and by the HTTP integration tests.
//! Contents are lost when the process exits.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CoreError;
use crate::record::{MovieRecord, NewRecord, RecordChanges};
use crate::store::{record_not_found, RecordStore};
use crate::types::RecordId;

#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<MovieRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create(&self, record: NewRecord) -> Result<MovieRecord, CoreError> {
        let now = Utc::now();
        let record = MovieRecord {
            id: Uuid::now_v7(),
            title: record.title,
            genre: record.genre,
            year: record.year,
            watched: record.watched,
            created_at: now,
            updated_at: now,
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<MovieRecord>, CoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn update(
        &self,
        id: RecordId,
        changes: RecordChanges,
    ) -> Result<MovieRecord, CoreError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| record_not_found(id))?;
        if !changes.is_empty() {
            changes.apply_to(record);
            record.updated_at = Utc::now();
        }
        Ok(record.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<(), CoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(record_not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
