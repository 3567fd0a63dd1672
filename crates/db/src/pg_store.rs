//! [`RecordStore`] implementation over a PostgreSQL pool.

use async_trait::async_trait;
use watchlist_core::error::CoreError;
use watchlist_core::record::{MovieRecord, NewRecord, RecordChanges};
use watchlist_core::store::{record_not_found, RecordStore};
use watchlist_core::types::RecordId;

use crate::repositories::RecordRepo;
use crate::DbPool;

/// Record store backed by the `movie_records` table.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: DbPool,
}

impl PgRecordStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a driver error into a store error. The detail is logged where the
/// error is turned into a response, never sent to the caller.
fn store_error(err: sqlx::Error) -> CoreError {
    CoreError::Store(err.to_string())
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn create(&self, record: NewRecord) -> Result<MovieRecord, CoreError> {
        RecordRepo::create(&self.pool, &record)
            .await
            .map(MovieRecord::from)
            .map_err(store_error)
    }

    async fn list_all(&self) -> Result<Vec<MovieRecord>, CoreError> {
        let rows = RecordRepo::list(&self.pool).await.map_err(store_error)?;
        Ok(rows.into_iter().map(MovieRecord::from).collect())
    }

    async fn update(
        &self,
        id: RecordId,
        changes: RecordChanges,
    ) -> Result<MovieRecord, CoreError> {
        let row = if changes.is_empty() {
            RecordRepo::find_by_id(&self.pool, id).await
        } else {
            RecordRepo::update(&self.pool, id, &changes).await
        };
        row.map_err(store_error)?
            .map(MovieRecord::from)
            .ok_or_else(|| record_not_found(id))
    }

    async fn delete(&self, id: RecordId) -> Result<(), CoreError> {
        if RecordRepo::delete(&self.pool, id).await.map_err(store_error)? {
            Ok(())
        } else {
            Err(record_not_found(id))
        }
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }
}
