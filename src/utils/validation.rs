//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SurrealDB SCHEMALESS tables enforce no lengths, so every
//! client-supplied string is capped here before it reaches the store.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Names: person names, hospital names, departments, qualifications
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone, registration number, employee id, Aadhaar
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that a required Option<String> is present, non-empty and within limit.
pub fn validate_required_field(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<String, AppError> {
    match value {
        Some(v) => {
            validate_required_text(v, field, max_len)?;
            Ok(v.trim().to_string())
        }
        None => Err(AppError::validation(format!("{field} is required"))),
    }
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}
