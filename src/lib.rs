//! # Grove - Tree-Planting Registry
//!
//! SQLite-backed record service for a conservation-tracking effort.
//!
//! Grove provides:
//! - A single `trees` table with autoincrement identity
//! - Validation and normalization of record payloads before persistence
//! - A record service exposing CRUD operations and aggregate statistics
//! - An HTTP/JSON boundary consumed by the map and admin UI

pub mod config;
pub mod record;
pub mod server;
pub mod service;
pub mod storage;
pub mod ui;
pub mod validate;

// Re-exports for convenient access
pub use record::{TreeRecord, TreeStats};
pub use service::TreeService;
pub use storage::SqliteStore;
pub use validate::{TreeInput, ValidTree};

/// Result type alias for Grove operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Grove operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Tree not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
