//! Worker Repository
//!
//! Health-record CRUD for migrant workers, scoped to the hospital that
//! registered them. A record belonging to another hospital is reported as
//! not found, never as forbidden.

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{WorkerCreate, WorkerRecord, WorkerUpdate};
use crate::utils::now_millis;

#[derive(Clone, Debug)]
pub struct WorkerRepository {
    base: BaseRepository,
}

impl WorkerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All workers registered by one hospital, newest first
    pub async fn find_for_hospital(&self, hospital_id: &RecordId) -> RepoResult<Vec<WorkerRecord>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM worker WHERE hospitalId = $hospital_id ORDER BY createdAt DESC")
            .bind(("hospital_id", hospital_id.clone()))
            .await?;

        let workers: Vec<WorkerRecord> = result.take(0)?;
        Ok(workers)
    }

    /// Register a worker under the given hospital.
    ///
    /// `worker_id` is the display code generated by the caller; `registered_on`
    /// defaults are also resolved before this point.
    pub async fn create(
        &self,
        worker_id: String,
        hospital_id: RecordId,
        hospital_name: String,
        data: WorkerCreate,
    ) -> RepoResult<WorkerRecord> {
        let mut result = self
            .base
            .db()
            .query(
                "CREATE worker SET
                    workerId = $worker_id,
                    name = $name,
                    dob = $dob,
                    gender = $gender,
                    contact = $contact,
                    homeState = $home_state,
                    idType = $id_type,
                    idNumber = $id_number,
                    registeredOn = $registered_on,
                    hospitalId = $hospital_id,
                    hospitalName = $hospital_name,
                    createdAt = $created_at
                RETURN AFTER",
            )
            .bind(("worker_id", worker_id))
            .bind(("name", data.name))
            .bind(("dob", data.dob))
            .bind(("gender", data.gender))
            .bind(("contact", data.contact))
            .bind(("home_state", data.home_state))
            .bind(("id_type", data.id_type))
            .bind(("id_number", data.id_number))
            .bind(("registered_on", data.registered_on.unwrap_or_default()))
            .bind(("hospital_id", hospital_id))
            .bind(("hospital_name", hospital_name))
            .bind(("created_at", now_millis()))
            .await?;

        let created: Option<WorkerRecord> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create worker".to_string()))
    }

    /// Update a worker owned by `hospital_id`. Only the fields present in
    /// `data` are touched.
    pub async fn update(
        &self,
        hospital_id: &RecordId,
        id: &str,
        data: WorkerUpdate,
    ) -> RepoResult<WorkerRecord> {
        let record_id = self.owned_record(hospital_id, id).await?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $worker MERGE $data RETURN AFTER")
            .bind(("worker", record_id))
            .bind(("data", data))
            .await?;

        let updated: Option<WorkerRecord> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Worker {} not found", id)))
    }

    /// Delete a worker owned by `hospital_id`
    pub async fn delete(&self, hospital_id: &RecordId, id: &str) -> RepoResult<()> {
        let record_id = self.owned_record(hospital_id, id).await?;
        let _: Option<WorkerRecord> = self.base.db().delete(record_id).await?;
        Ok(())
    }

    /// Resolve `id` to a record owned by `hospital_id`, or NotFound
    async fn owned_record(&self, hospital_id: &RecordId, id: &str) -> RepoResult<RecordId> {
        let record_id: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        let existing: Option<WorkerRecord> = self.base.db().select(record_id.clone()).await?;
        match existing {
            Some(worker) if worker.hospital_id == *hospital_id => Ok(record_id),
            _ => Err(RepoError::NotFound(format!("Worker {} not found", id))),
        }
    }
}
