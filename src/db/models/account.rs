//! Account Model
//!
//! One account per registered identity. The `role` determines which
//! natural key identifies the account (mobile for workers, email for
//! hospitals and government officials) and which [`RoleDetails`] variant
//! it carries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Account ID type
pub type AccountId = RecordId;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Worker,
    Hospital,
    Gov,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Worker => "worker",
            Role::Hospital => "hospital",
            Role::Gov => "gov",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "worker" => Ok(Role::Worker),
            "hospital" => Ok(Role::Hospital),
            "gov" => Ok(Role::Gov),
            _ => Err(()),
        }
    }
}

/// Role-specific account attributes, one variant per role.
///
/// Serializes with the role tag inline, so an account document reads
/// `{"role": "hospital", "hospitalName": ..., ...}` under `roleDetails`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleDetails {
    Worker(WorkerDetails),
    Hospital(HospitalDetails),
    Gov(GovDetails),
}

impl RoleDetails {
    pub fn role(&self) -> Role {
        match self {
            RoleDetails::Worker(_) => Role::Worker,
            RoleDetails::Hospital(_) => Role::Hospital,
            RoleDetails::Gov(_) => Role::Gov,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerDetails {
    pub aadhaar_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDetails {
    pub hospital_name: String,
    pub registration_number: String,
    pub administrator_email: String,
    pub admin_contact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovDetails {
    pub official_email: String,
    pub employee_id: String,
    pub verification_code: String,
}

/// Account model matching the SurrealDB `account` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<AccountId>,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub role: Role,
    pub role_details: RoleDetails,
    pub created_at: i64,
}

/// Create account payload (built by the signup handler after validation)
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub display_name: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub password: String,
    pub role: Role,
    pub role_details: RoleDetails,
}

impl Account {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}
