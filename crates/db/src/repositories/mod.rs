//! Repository layer: one unit struct per table, associated async fns over a pool.

pub mod record_repo;

pub use record_repo::RecordRepo;
