//! Authentication Handlers
//!
//! Signup, login, and current-account lookup. All three roles share one flat
//! signup payload; which fields are required depends on the role.

use std::str::FromStr;

use axum::{Json, extract::State};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::auth::CurrentAccount;
use crate::core::ServerState;
use crate::db::models::{
    Account, AccountCreate, GovDetails, HospitalDetails, Role, RoleDetails, WorkerDetails,
};
use crate::db::repository::AccountRepository;
use crate::security_log;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_required_field,
};
use crate::utils::{AppError, AppResult};

/// Signup request. One flat object for all three roles; `role` decides which
/// of the optional fields are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub role: String,
    // worker
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub aadhaar_number: Option<String>,
    // hospital
    #[serde(default)]
    pub hospital_name: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub administrator_email: Option<String>,
    #[serde(default)]
    pub admin_contact: Option<String>,
    // gov
    #[serde(default)]
    pub official_email: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub verification_code: Option<String>,
    // common
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub token: String,
    pub user: AccountSummary,
}

/// Login request. The lookup key depends on `role`: mobileNumber (worker),
/// employeeId (gov), registrationNumber (hospital).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub role: String,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub role: Role,
}

fn parse_role(role: &str) -> Result<Role, AppError> {
    Role::from_str(role).map_err(|_| AppError::validation(format!("Invalid role: {}", role)))
}

/// Validate the role's required fields and assemble the account payload.
///
/// Account email is lowercased; the role details keep the submitted casing.
fn build_account(req: SignupRequest, role: Role) -> AppResult<AccountCreate> {
    let password = validate_required_field(req.password.as_deref(), "password", MAX_PASSWORD_LEN)?;

    match role {
        Role::Worker => {
            let name = validate_required_field(req.name.as_deref(), "name", MAX_NAME_LEN)?;
            let mobile = validate_required_field(
                req.mobile_number.as_deref(),
                "mobileNumber",
                MAX_SHORT_TEXT_LEN,
            )?;
            let aadhaar = validate_required_field(
                req.aadhaar_number.as_deref(),
                "aadhaarNumber",
                MAX_SHORT_TEXT_LEN,
            )?;

            Ok(AccountCreate {
                display_name: name,
                email: None,
                mobile: Some(mobile),
                password,
                role,
                role_details: RoleDetails::Worker(WorkerDetails {
                    aadhaar_number: aadhaar,
                }),
            })
        }
        Role::Hospital => {
            let hospital_name = validate_required_field(
                req.hospital_name.as_deref(),
                "hospitalName",
                MAX_NAME_LEN,
            )?;
            let registration_number = validate_required_field(
                req.registration_number.as_deref(),
                "registrationNumber",
                MAX_SHORT_TEXT_LEN,
            )?;
            let administrator_email = validate_required_field(
                req.administrator_email.as_deref(),
                "administratorEmail",
                MAX_EMAIL_LEN,
            )?;
            let admin_contact = validate_required_field(
                req.admin_contact.as_deref(),
                "adminContact",
                MAX_SHORT_TEXT_LEN,
            )?;

            Ok(AccountCreate {
                display_name: hospital_name.clone(),
                email: Some(administrator_email.to_lowercase()),
                mobile: None,
                password,
                role,
                role_details: RoleDetails::Hospital(HospitalDetails {
                    hospital_name,
                    registration_number,
                    administrator_email,
                    admin_contact,
                }),
            })
        }
        Role::Gov => {
            let official_email = validate_required_field(
                req.official_email.as_deref(),
                "officialEmail",
                MAX_EMAIL_LEN,
            )?;
            let employee_id = validate_required_field(
                req.employee_id.as_deref(),
                "employeeId",
                MAX_SHORT_TEXT_LEN,
            )?;
            let verification_code = validate_required_field(
                req.verification_code.as_deref(),
                "verificationCode",
                MAX_SHORT_TEXT_LEN,
            )?;

            Ok(AccountCreate {
                display_name: "Gov Official".to_string(),
                email: Some(official_email.to_lowercase()),
                mobile: None,
                password,
                role,
                role_details: RoleDetails::Gov(GovDetails {
                    official_email,
                    employee_id,
                    verification_code,
                }),
            })
        }
    }
}

/// Register a new account and issue its first token
pub async fn signup(
    State(state): State<ServerState>,
    Json(req): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let role = parse_role(&req.role)?;
    let data = build_account(req, role)?;

    let repo = AccountRepository::new(state.get_db());
    let account = repo.create(data).await?;

    let account_id = account.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&account_id, &account.display_name, account.role.as_str())
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(account_id = %account_id, role = %account.role, "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User registered successfully".to_string(),
            token,
            user: AccountSummary {
                name: account.display_name,
                role: account.role,
            },
        }),
    ))
}

/// Authenticate by role-specific key and password
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let role = parse_role(&req.role)?;
    let repo = AccountRepository::new(state.get_db());

    let account = match role {
        Role::Worker => match req.mobile_number.as_deref() {
            Some(mobile) => repo.find_by_mobile(mobile.trim()).await?,
            None => None,
        },
        Role::Gov => match req.employee_id.as_deref() {
            Some(employee_id) => repo.find_by_employee_id(employee_id.trim()).await?,
            None => None,
        },
        Role::Hospital => match req.registration_number.as_deref() {
            Some(registration_number) => {
                repo.find_by_registration_number(registration_number.trim())
                    .await?
            }
            None => None,
        },
    };

    let account = account.ok_or_else(|| AppError::not_found("User not found"))?;

    let password = req.password.unwrap_or_default();
    let password_valid = account
        .verify_password(&password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

    if !password_valid {
        security_log!("WARN", "login_failed", role = role.as_str());
        return Err(AppError::invalid_credentials());
    }

    let account_id = account.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&account_id, &account.display_name, account.role.as_str())
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(account_id = %account_id, role = %account.role, "Login successful");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        role: account.role,
    }))
}

/// Current account, loaded fresh by the auth middleware
pub async fn me(current: CurrentAccount) -> Json<Account> {
    Json(current.account)
}
