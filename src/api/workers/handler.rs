//! Worker Record Handlers
//!
//! Every operation runs as the authenticated hospital; records belonging to
//! other hospitals are invisible here.

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde_json::{Value, json};

use crate::auth::CurrentAccount;
use crate::core::ServerState;
use crate::db::models::{WorkerCreate, WorkerRecord, WorkerUpdate};
use crate::db::repository::WorkerRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppResult, codes};

/// List workers registered by the calling hospital, newest first
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentAccount,
) -> AppResult<Json<Vec<WorkerRecord>>> {
    let repo = WorkerRepository::new(state.get_db());
    let workers = repo.find_for_hospital(&current.id).await?;
    Ok(Json(workers))
}

/// Register a new worker under the calling hospital
pub async fn create(
    State(state): State<ServerState>,
    current: CurrentAccount,
    Json(mut payload): Json<WorkerCreate>,
) -> AppResult<(StatusCode, Json<WorkerRecord>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.dob, "dob", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.gender, "gender", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.contact, "contact", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.id_number, "idNumber", MAX_SHORT_TEXT_LEN)?;

    // The worker code prefix comes from the hospital name in the payload,
    // not the account (staff codes differ, see staff::handler)
    let worker_id = codes::worker_code(payload.hospital_name.as_deref());

    if payload
        .registered_on
        .as_deref()
        .is_none_or(|s| s.trim().is_empty())
    {
        payload.registered_on = Some(crate::utils::today());
    }

    let hospital_name = payload.hospital_name.clone().unwrap_or_default();

    let repo = WorkerRepository::new(state.get_db());
    let worker = repo
        .create(worker_id, current.id.clone(), hospital_name, payload)
        .await?;

    tracing::info!(
        worker_id = %worker.worker_id,
        hospital = %current.account.display_name,
        "Worker registered"
    );

    Ok((StatusCode::CREATED, Json(worker)))
}

/// Update a worker owned by the calling hospital.
///
/// Merge semantics: absent fields keep their stored values, so only length
/// caps apply here, not the create-side required checks.
pub async fn update(
    State(state): State<ServerState>,
    current: CurrentAccount,
    Path(id): Path<String>,
    Json(payload): Json<WorkerUpdate>,
) -> AppResult<Json<WorkerRecord>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.dob, "dob", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.gender, "gender", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.contact, "contact", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.home_state, "homeState", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.id_type, "idType", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.id_number, "idNumber", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.registered_on, "registeredOn", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.hospital_name, "hospitalName", MAX_NAME_LEN)?;

    let repo = WorkerRepository::new(state.get_db());
    let worker = repo.update(&current.id, &id, payload).await?;
    Ok(Json(worker))
}

/// Delete a worker owned by the calling hospital
pub async fn delete(
    State(state): State<ServerState>,
    current: CurrentAccount,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let repo = WorkerRepository::new(state.get_db());
    repo.delete(&current.id, &id).await?;

    tracing::info!(id = %id, hospital = %current.account.display_name, "Worker deleted");

    Ok(Json(json!({ "message": "Worker deleted successfully" })))
}
