//! Repository for the `movie_records` table.

use sqlx::PgPool;
use watchlist_core::record::{NewRecord, RecordChanges};
use watchlist_core::types::RecordId;

use crate::models::record::RecordRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, year, watched, created_at, updated_at";

/// Provides CRUD operations for movie records.
pub struct RecordRepo;

impl RecordRepo {
    /// Insert a new record, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewRecord) -> Result<RecordRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_records (title, genre, year, watched) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecordRow>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.year)
            .bind(input.watched)
            .fetch_one(pool)
            .await
    }

    /// Find a record by id.
    pub async fn find_by_id(pool: &PgPool, id: RecordId) -> Result<Option<RecordRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_records WHERE id = $1");
        sqlx::query_as::<_, RecordRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all records in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<RecordRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_records ORDER BY created_at, id");
        sqlx::query_as::<_, RecordRow>(&query).fetch_all(pool).await
    }

    /// Update a record. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: RecordId,
        input: &RecordChanges,
    ) -> Result<Option<RecordRow>, sqlx::Error> {
        let query = format!(
            "UPDATE movie_records SET \
                title = COALESCE($2, title), \
                genre = COALESCE($3, genre), \
                year = COALESCE($4, year), \
                watched = COALESCE($5, watched), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecordRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.year)
            .bind(input.watched)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
