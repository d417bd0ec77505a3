//! # Gradebook - In-memory SQLite walkthrough
//!
//! A small end-to-end tour of an embedded relational database: a three-table
//! schema with composite keys and cascading foreign keys, transactional seed
//! data, full-table dumps, and two fixed grade reports.
//!
//! Gradebook provides:
//! - Students, course registrations, and grades with composite primary keys
//!   and cascading foreign keys
//! - A session-scoped in-memory store handle with guaranteed release
//! - Per-table transactional seed loaders over a fixed sample dataset
//! - Full-table dumps and two aggregate reports (max grade with ties kept,
//!   average grade per student)

pub mod model;
pub mod storage;
pub mod seed;
pub mod report;

// Re-exports for convenient access
pub use model::{Grade, Registration, Student};
pub use report::{AverageGradeRow, MaxGradeRow, TableDump};
pub use storage::GradebookStore;

/// Result type alias for gradebook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for gradebook operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Seed error on table {table}: {source}")]
    Seed {
        table: &'static str,
        source: rusqlite::Error,
    },
}
