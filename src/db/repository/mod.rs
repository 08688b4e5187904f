//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables.

pub mod account;
pub mod staff;
pub mod worker;

// Re-exports
pub use account::AccountRepository;
pub use staff::StaffRepository;
pub use worker::WorkerRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings everywhere outside the store
// =============================================================================
//
// surrealdb::RecordId handles all IDs:
//   - parse:   let id: RecordId = "worker:abc".parse()?;
//   - table:   id.table()
//   - key:     id.key().to_string()
//   - CRUD:    db.select(id) / db.delete(id) take RecordId directly

/// Base repository with database reference
#[derive(Clone, Debug)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
