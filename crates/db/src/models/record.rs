//! Row model for the `movie_records` table.

use sqlx::FromRow;
use watchlist_core::record::MovieRecord;
use watchlist_core::types::{RecordId, Timestamp};
use watchlist_core::watched::resolve_watched;

/// A row from the `movie_records` table.
///
/// `watched` is nullable in the schema; conversion into [`MovieRecord`]
/// resolves it through the canonical accessor.
#[derive(Debug, Clone, FromRow)]
pub struct RecordRow {
    pub id: RecordId,
    pub title: String,
    pub genre: String,
    pub year: i32,
    pub watched: Option<bool>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<RecordRow> for MovieRecord {
    fn from(row: RecordRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            genre: row.genre,
            year: row.year,
            watched: resolve_watched(row.watched),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
