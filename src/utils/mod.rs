//! Utility modules
//!
//! - [`error`] - application error type and HTTP error envelope
//! - [`codes`] - worker/staff record code generation
//! - [`validation`] - input validation helpers
//! - [`logger`] - tracing setup

pub mod codes;
pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};

/// Current time as millisecond timestamp
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date in `YYYY-MM-DD` (UTC)
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
