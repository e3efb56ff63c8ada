//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - trees(id, species, latitude, longitude, planted_date, planter_name, notes, status, created_at, updated_at)

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStore;
