//! Database Module
//!
//! Handles the embedded SurrealDB (RocksDB backend) connection and schema.

pub mod models;
pub mod repository;

pub use repository::{AccountRepository, RepoError, RepoResult, StaffRepository, WorkerRepository};

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and prepare the schema
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("swasthya")
            .use_db("records")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        Self::define_schema(&db).await?;

        tracing::info!("Database connection established (SurrealDB RocksDB)");

        Ok(Self { db })
    }

    /// Tables are schemaless; lookups go through plain WHERE scans, so no
    /// indexes are defined here.
    async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        db.query(
            "DEFINE TABLE IF NOT EXISTS account SCHEMALESS;
             DEFINE TABLE IF NOT EXISTS worker SCHEMALESS;
             DEFINE TABLE IF NOT EXISTS staff SCHEMALESS;",
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn opens_and_defines_schema() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("test.db");
        let service = DbService::new(&path.to_string_lossy()).await.unwrap();

        // Schema definition is idempotent
        DbService::define_schema(&service.db).await.unwrap();
    }
}
