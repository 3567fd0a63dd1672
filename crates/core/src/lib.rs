//! Domain layer for the movie watchlist.
//!
//! Holds the record model and its input DTOs, validation rules, the
//! [`store::RecordStore`] seam with an in-memory implementation, and the
//! [`record_service::RecordService`] that HTTP handlers call into. Nothing
//! here depends on a database driver or an HTTP framework.

pub mod error;
pub mod memory_store;
pub mod record;
pub mod record_service;
pub mod store;
pub mod types;
pub mod watched;
