//! Authentication Module
//!
//! JWT credentials and the request-scoped identity they resolve to:
//! - [`JwtService`] issues and validates tokens
//! - [`CurrentAccount`] is the per-request identity
//! - [`require_auth`] / [`require_hospital`] are the route guards

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use extractor::CurrentAccount;
pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::{require_auth, require_hospital};
