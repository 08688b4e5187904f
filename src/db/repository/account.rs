//! Account Repository
//!
//! Handles signup inserts and the per-role credential lookups used by login.

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Account, AccountCreate, Role};
use crate::utils::now_millis;

#[derive(Clone, Debug)]
pub struct AccountRepository {
    base: BaseRepository,
}

impl AccountRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find account by record ID ("account:xyz")
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Account>> {
        let record_id: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let account: Option<Account> = self.base.db().select(record_id).await?;
        Ok(account)
    }

    /// Find account by mobile number (worker login key)
    pub async fn find_by_mobile(&self, mobile: &str) -> RepoResult<Option<Account>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM account WHERE mobile = $mobile LIMIT 1")
            .bind(("mobile", mobile.to_string()))
            .await?;

        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Find account by email (hospital and gov signup dedup key)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM account WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;

        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Find account by government employee ID (gov login key)
    pub async fn find_by_employee_id(&self, employee_id: &str) -> RepoResult<Option<Account>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM account WHERE roleDetails.employeeId = $employee_id LIMIT 1")
            .bind(("employee_id", employee_id.to_string()))
            .await?;

        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Find account by hospital registration number (hospital login key)
    pub async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> RepoResult<Option<Account>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM account WHERE roleDetails.registrationNumber = $registration_number LIMIT 1")
            .bind(("registration_number", registration_number.to_string()))
            .await?;

        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Create a new account.
    ///
    /// Workers are deduplicated by mobile number, hospitals and officials by
    /// email. The duplicate messages are part of the client contract.
    pub async fn create(&self, data: AccountCreate) -> RepoResult<Account> {
        match data.role {
            Role::Worker => {
                let mobile = data
                    .mobile
                    .as_deref()
                    .ok_or_else(|| RepoError::Validation("Mobile Number is required".to_string()))?;
                if self.find_by_mobile(mobile).await?.is_some() {
                    return Err(RepoError::Duplicate(
                        "A worker with this Mobile Number already exists.".to_string(),
                    ));
                }
            }
            Role::Hospital | Role::Gov => {
                let email = data
                    .email
                    .as_deref()
                    .ok_or_else(|| RepoError::Validation("Email is required".to_string()))?;
                if self.find_by_email(email).await?.is_some() {
                    return Err(RepoError::Duplicate(
                        "An account with this Email already exists.".to_string(),
                    ));
                }
            }
        }

        let hash_pass = Account::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {}", e)))?;

        // hashPass is skip_serializing on the model, so the insert spells out
        // every field instead of binding the struct as content.
        let mut result = self
            .base
            .db()
            .query(
                "CREATE account SET
                    displayName = $display_name,
                    email = $email,
                    mobile = $mobile,
                    hashPass = $hash_pass,
                    role = $role,
                    roleDetails = $role_details,
                    createdAt = $created_at
                RETURN AFTER",
            )
            .bind(("display_name", data.display_name))
            .bind(("email", data.email))
            .bind(("mobile", data.mobile))
            .bind(("hash_pass", hash_pass))
            .bind(("role", data.role))
            .bind(("role_details", data.role_details))
            .bind(("created_at", now_millis()))
            .await?;

        let created: Option<Account> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create account".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{HospitalDetails, RoleDetails, WorkerDetails};
    use surrealdb::engine::local::RocksDb;
    use tempfile::TempDir;

    async fn setup() -> (AccountRepository, TempDir) {
        let tmp = TempDir::new().unwrap();
        let db = Surreal::new::<RocksDb>(tmp.path()).await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        (AccountRepository::new(db), tmp)
    }

    fn worker_create(mobile: &str) -> AccountCreate {
        AccountCreate {
            display_name: "Ravi Kumar".to_string(),
            email: None,
            mobile: Some(mobile.to_string()),
            password: "secret123".to_string(),
            role: Role::Worker,
            role_details: RoleDetails::Worker(WorkerDetails {
                aadhaar_number: "123412341234".to_string(),
            }),
        }
    }

    fn hospital_create(email: &str) -> AccountCreate {
        AccountCreate {
            display_name: "City General".to_string(),
            email: Some(email.to_string()),
            mobile: None,
            password: "hunter2hunter2".to_string(),
            role: Role::Hospital,
            role_details: RoleDetails::Hospital(HospitalDetails {
                hospital_name: "City General".to_string(),
                registration_number: "RC1".to_string(),
                administrator_email: email.to_string(),
                admin_contact: "9999999999".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn create_stores_hash_not_password() {
        let (repo, _tmp) = setup().await;

        let created = repo.create(worker_create("9876543210")).await.unwrap();
        assert!(created.id.is_some());
        assert_ne!(created.hash_pass, "secret123");
        assert!(created.verify_password("secret123").unwrap());
        assert!(!created.verify_password("wrong").unwrap());
    }

    #[tokio::test]
    async fn duplicate_mobile_rejected_for_workers() {
        let (repo, _tmp) = setup().await;

        repo.create(worker_create("9876543210")).await.unwrap();
        let err = repo.create(worker_create("9876543210")).await.unwrap_err();
        match err {
            RepoError::Duplicate(msg) => {
                assert_eq!(msg, "A worker with this Mobile Number already exists.")
            }
            other => panic!("expected Duplicate, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn duplicate_email_rejected_for_hospitals() {
        let (repo, _tmp) = setup().await;

        repo.create(hospital_create("admin@city.example")).await.unwrap();
        let err = repo
            .create(hospital_create("admin@city.example"))
            .await
            .unwrap_err();
        match err {
            RepoError::Duplicate(msg) => {
                assert_eq!(msg, "An account with this Email already exists.")
            }
            other => panic!("expected Duplicate, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn lookup_by_nested_registration_number() {
        let (repo, _tmp) = setup().await;

        repo.create(hospital_create("admin@city.example")).await.unwrap();
        let found = repo.find_by_registration_number("RC1").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().display_name, "City General");

        let missing = repo.find_by_registration_number("RC999").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn find_by_id_roundtrip() {
        let (repo, _tmp) = setup().await;

        let created = repo.create(worker_create("9876543210")).await.unwrap();
        let id = created.id.as_ref().unwrap().to_string();

        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.display_name, "Ravi Kumar");

        let err = repo.find_by_id("not-a-record-id").await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }
}
