//! The persistence seam for movie records.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::record::{MovieRecord, NewRecord, RecordChanges};
use crate::types::RecordId;

/// Persistent collection of movie records.
///
/// Implementations assign ids and timestamps. Unknown ids on `update` and
/// `delete` fail with [`CoreError::NotFound`]; backend failures surface as
/// [`CoreError::Store`]. There is no locking across calls: concurrent
/// updates to one record are last-write-wins.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a validated record and return it with its assigned id.
    async fn create(&self, record: NewRecord) -> Result<MovieRecord, CoreError>;

    /// All records in insertion order.
    async fn list_all(&self) -> Result<Vec<MovieRecord>, CoreError>;

    /// Apply `changes` to the record with `id` and return the updated row.
    /// Empty changes return the record as stored.
    async fn update(&self, id: RecordId, changes: RecordChanges)
        -> Result<MovieRecord, CoreError>;

    /// Hard-delete the record with `id`.
    async fn delete(&self, id: RecordId) -> Result<(), CoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), CoreError>;
}

/// Build the not-found error for a record id.
pub fn record_not_found(id: impl ToString) -> CoreError {
    CoreError::NotFound {
        entity: crate::record::RECORD_ENTITY,
        id: id.to_string(),
    }
}
