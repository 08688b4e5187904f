//! Authentication Middleware
//!
//! Axum middleware enforcing bearer-token auth on the API surface.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::JwtService;
use crate::auth::extractor::{CurrentAccount, resolve_account};
use crate::core::ServerState;
use crate::security_log;

/// Paths under `/api/` reachable without a token
const PUBLIC_API_ROUTES: &[&str] = &[
    "/api/auth/signup",
    "/api/auth/login",
    "/api/hospital/alerts",
    "/api/health",
];

/// Authentication middleware.
///
/// Extracts and validates the `Authorization: Bearer <token>` header, loads
/// the account, and injects [`CurrentAccount`] into request extensions.
///
/// Skipped for:
/// - `OPTIONS *` (CORS preflight)
/// - paths outside `/api/` (they 404 normally)
/// - the public routes in [`PUBLIC_API_ROUTES`]
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if PUBLIC_API_ROUTES.contains(&path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    let current = resolve_account(&state, token).await?;
    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}

/// Hospital-role middleware for the management routes.
///
/// Must run after [`require_auth`]. Any non-hospital account gets the same
/// 401 as an unauthenticated request.
pub async fn require_hospital(req: Request, next: Next) -> Result<Response, AppError> {
    let current = req
        .extensions()
        .get::<CurrentAccount>()
        .ok_or_else(AppError::unauthorized)?;

    if !current.is_hospital() {
        security_log!(
            "WARN",
            "hospital_required",
            account_id = current.id.to_string(),
            role = current.account.role.as_str()
        );
        return Err(AppError::unauthorized());
    }

    Ok(next.run(req).await)
}
