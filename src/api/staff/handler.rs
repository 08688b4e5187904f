//! Staff Record Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde_json::{Value, json};

use crate::auth::CurrentAccount;
use crate::core::ServerState;
use crate::db::models::{StaffCreate, StaffRecord, StaffUpdate};
use crate::db::repository::StaffRepository;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppResult, codes};

/// List staff employed by the calling hospital, newest first
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentAccount,
) -> AppResult<Json<Vec<StaffRecord>>> {
    let repo = StaffRepository::new(state.get_db());
    let staff = repo.find_for_hospital(&current.id).await?;
    Ok(Json(staff))
}

/// Add a staff member under the calling hospital
pub async fn create(
    State(state): State<ServerState>,
    current: CurrentAccount,
    Json(payload): Json<StaffCreate>,
) -> AppResult<(StatusCode, Json<StaffRecord>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.role, "role", MAX_NAME_LEN)?;

    // Staff code prefixes come from the account's display name, unlike
    // worker codes which use the payload's hospital name
    let staff_id = codes::staff_code(&current.account.display_name, &payload.role);

    let repo = StaffRepository::new(state.get_db());
    let staff = repo
        .create(staff_id, current.id.clone(), payload)
        .await?;

    tracing::info!(
        staff_id = %staff.staff_id,
        hospital = %current.account.display_name,
        "Staff added"
    );

    Ok((StatusCode::CREATED, Json(staff)))
}

/// Update a staff member owned by the calling hospital.
///
/// Merge semantics: absent fields keep their stored values, so only length
/// caps apply here, not the create-side required checks.
pub async fn update(
    State(state): State<ServerState>,
    current: CurrentAccount,
    Path(id): Path<String>,
    Json(payload): Json<StaffUpdate>,
) -> AppResult<Json<StaffRecord>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.role, "role", MAX_NAME_LEN)?;
    validate_optional_text(&payload.department, "department", MAX_NAME_LEN)?;
    validate_optional_text(&payload.qualification, "qualification", MAX_NAME_LEN)?;
    validate_optional_text(&payload.contact, "contact", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.date_of_joining, "dateOfJoining", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.shift_timing, "shiftTiming", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.experience, "experience", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.salary, "salary", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(
        &payload.emergency_contact,
        "emergencyContact",
        MAX_SHORT_TEXT_LEN,
    )?;

    let repo = StaffRepository::new(state.get_db());
    let staff = repo.update(&current.id, &id, payload).await?;
    Ok(Json(staff))
}

/// Delete a staff member owned by the calling hospital
pub async fn delete(
    State(state): State<ServerState>,
    current: CurrentAccount,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let repo = StaffRepository::new(state.get_db());
    repo.delete(&current.id, &id).await?;

    tracing::info!(id = %id, hospital = %current.account.display_name, "Staff deleted");

    Ok(Json(json!({ "message": "Staff deleted" })))
}
