//! Staff Repository
//!
//! Same ownership discipline as the worker repository: every read and write
//! is scoped to the hospital account that created the record.

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{StaffCreate, StaffRecord, StaffUpdate};
use crate::utils::now_millis;

#[derive(Clone, Debug)]
pub struct StaffRepository {
    base: BaseRepository,
}

impl StaffRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All staff employed by one hospital, newest first
    pub async fn find_for_hospital(&self, hospital_id: &RecordId) -> RepoResult<Vec<StaffRecord>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM staff WHERE hospitalId = $hospital_id ORDER BY createdAt DESC")
            .bind(("hospital_id", hospital_id.clone()))
            .await?;

        let staff: Vec<StaffRecord> = result.take(0)?;
        Ok(staff)
    }

    /// Add a staff member under the given hospital
    pub async fn create(
        &self,
        staff_id: String,
        hospital_id: RecordId,
        data: StaffCreate,
    ) -> RepoResult<StaffRecord> {
        let mut result = self
            .base
            .db()
            .query(
                "CREATE staff SET
                    staffId = $staff_id,
                    name = $name,
                    role = $role,
                    department = $department,
                    qualification = $qualification,
                    contact = $contact,
                    email = $email,
                    address = $address,
                    dateOfJoining = $date_of_joining,
                    shiftTiming = $shift_timing,
                    experience = $experience,
                    salary = $salary,
                    emergencyContact = $emergency_contact,
                    hospitalId = $hospital_id,
                    createdAt = $created_at
                RETURN AFTER",
            )
            .bind(("staff_id", staff_id))
            .bind(("name", data.name))
            .bind(("role", data.role))
            .bind(("department", data.department))
            .bind(("qualification", data.qualification))
            .bind(("contact", data.contact))
            .bind(("email", data.email))
            .bind(("address", data.address))
            .bind(("date_of_joining", data.date_of_joining))
            .bind(("shift_timing", data.shift_timing))
            .bind(("experience", data.experience))
            .bind(("salary", data.salary))
            .bind(("emergency_contact", data.emergency_contact))
            .bind(("hospital_id", hospital_id))
            .bind(("created_at", now_millis()))
            .await?;

        let created: Option<StaffRecord> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create staff".to_string()))
    }

    /// Update a staff member owned by `hospital_id`
    pub async fn update(
        &self,
        hospital_id: &RecordId,
        id: &str,
        data: StaffUpdate,
    ) -> RepoResult<StaffRecord> {
        let record_id = self.owned_record(hospital_id, id).await?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $staff MERGE $data RETURN AFTER")
            .bind(("staff", record_id))
            .bind(("data", data))
            .await?;

        let updated: Option<StaffRecord> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Staff {} not found", id)))
    }

    /// Delete a staff member owned by `hospital_id`
    pub async fn delete(&self, hospital_id: &RecordId, id: &str) -> RepoResult<()> {
        let record_id = self.owned_record(hospital_id, id).await?;
        let _: Option<StaffRecord> = self.base.db().delete(record_id).await?;
        Ok(())
    }

    async fn owned_record(&self, hospital_id: &RecordId, id: &str) -> RepoResult<RecordId> {
        let record_id: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        let existing: Option<StaffRecord> = self.base.db().select(record_id.clone()).await?;
        match existing {
            Some(staff) if staff.hospital_id == *hospital_id => Ok(record_id),
            _ => Err(RepoError::NotFound(format!("Staff {} not found", id))),
        }
    }
}
