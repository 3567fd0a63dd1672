//! Integration tests for the `movie_records` repository and Postgres store.
//!
//! These need a live PostgreSQL server: run with
//! `DATABASE_URL=postgres://... cargo test -p watchlist-db -- --ignored`.

use assert_matches::assert_matches;
use sqlx::PgPool;
use watchlist_core::error::CoreError;
use watchlist_core::record::{NewRecord, RecordChanges};
use watchlist_core::store::RecordStore;
use watchlist_db::pg_store::PgRecordStore;
use watchlist_db::repositories::RecordRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_record(title: &str, watched: bool) -> NewRecord {
    NewRecord {
        title: title.to_string(),
        genre: "Sci-Fi".to_string(),
        year: 2021,
        watched,
    }
}

// ---------------------------------------------------------------------------
// RecordRepo
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_assigns_id_and_timestamps(pool: PgPool) {
    let row = RecordRepo::create(&pool, &new_record("Dune", false))
        .await
        .unwrap();

    assert_eq!(row.title, "Dune");
    assert_eq!(row.watched, Some(false));
    assert_eq!(row.created_at, row.updated_at);

    let found = RecordRepo::find_by_id(&pool, row.id).await.unwrap();
    assert!(found.is_some());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn list_returns_insertion_order(pool: PgPool) {
    RecordRepo::create(&pool, &new_record("First", false))
        .await
        .unwrap();
    RecordRepo::create(&pool, &new_record("Second", true))
        .await
        .unwrap();

    let titles: Vec<String> = RecordRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, ["First", "Second"]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn partial_update_preserves_other_columns(pool: PgPool) {
    let row = RecordRepo::create(&pool, &new_record("Dune", false))
        .await
        .unwrap();

    let changes = RecordChanges {
        watched: Some(true),
        ..Default::default()
    };
    let updated = RecordRepo::update(&pool, row.id, &changes)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.watched, Some(true));
    assert_eq!(updated.title, "Dune");
    assert_eq!(updated.genre, "Sci-Fi");
    assert_eq!(updated.year, 2021);
    assert!(updated.updated_at >= row.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_missing_row_returns_none(pool: PgPool) {
    let result = RecordRepo::update(&pool, uuid::Uuid::now_v7(), &RecordChanges::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn blank_title_violates_check_constraint(pool: PgPool) {
    let result = RecordRepo::create(&pool, &new_record("  ", false)).await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn null_watched_resolves_to_false(pool: PgPool) {
    sqlx::query("INSERT INTO movie_records (title, genre, year) VALUES ('Heat', 'Crime', 1995)")
        .execute(&pool)
        .await
        .unwrap();

    let store = PgRecordStore::new(pool);
    let records = store.list_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert!(!records[0].watched);
}

// ---------------------------------------------------------------------------
// PgRecordStore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn delete_twice_is_not_found(pool: PgPool) {
    let store = PgRecordStore::new(pool);
    let record = store.create(new_record("Dune", false)).await.unwrap();

    store.delete(record.id).await.unwrap();
    assert!(store.list_all().await.unwrap().is_empty());
    assert_matches!(
        store.delete(record.id).await,
        Err(CoreError::NotFound { .. })
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn ping_succeeds_on_live_pool(pool: PgPool) {
    let store = PgRecordStore::new(pool);
    assert!(store.ping().await.is_ok());
}
