//! Swasthya Server - migrant worker health record backend
//!
//! # Overview
//!
//! Role-based REST API for three account types: migrant workers, hospitals,
//! and government officials. Hospitals register and manage worker health
//! records and their own staff; every management route is scoped to the
//! hospital that owns the records.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # Config, state, HTTP server
//! ├── auth/          # JWT service, identity extractor, middleware
//! ├── api/           # Routes and handlers
//! ├── db/            # Embedded SurrealDB, models, repositories
//! └── utils/         # Errors, validation, code generation, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentAccount, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
