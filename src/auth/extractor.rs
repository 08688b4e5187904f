//! Authenticated Account Extractor
//!
//! Handlers take [`CurrentAccount`] as a parameter to get the account bound
//! to the request's token.

use axum::{extract::FromRequestParts, http::request::Parts};
use surrealdb::RecordId;

use crate::AppError;
use crate::auth::JwtService;
use crate::core::ServerState;
use crate::db::models::{Account, Role};
use crate::db::repository::AccountRepository;
use crate::security_log;

/// The account resolved for the current request.
///
/// Created by the auth middleware and stashed in request extensions. `id` is
/// the mandatory record ID; `account.id` stays `Option` on the model because
/// it is absent before insert.
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub id: RecordId,
    pub account: Account,
}

impl CurrentAccount {
    /// Wrap a stored account, rejecting one that never got an ID
    pub fn from_account(account: Account) -> Result<Self, AppError> {
        let id = account
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Account record has no ID"))?;
        Ok(Self { id, account })
    }

    pub fn is_hospital(&self) -> bool {
        self.account.role == Role::Hospital
    }
}

/// Resolve a bearer token to its account.
///
/// Claims only identify the account; the record itself is loaded fresh so
/// stale tokens for deleted accounts stop working immediately.
pub(crate) async fn resolve_account(
    state: &ServerState,
    token: &str,
) -> Result<CurrentAccount, AppError> {
    let claims = state.get_jwt_service().validate_token(token).map_err(|e| {
        security_log!("WARN", "auth_failed", error = format!("{}", e));
        match e {
            crate::auth::JwtError::ExpiredToken => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid token"),
        }
    })?;

    let repo = AccountRepository::new(state.get_db());
    let account = repo
        .find_by_id(&claims.sub)
        .await
        .map_err(|e| AppError::database(format!("Account lookup failed: {}", e)))?;

    match account {
        Some(account) => CurrentAccount::from_account(account),
        None => {
            security_log!("WARN", "account_missing", sub = claims.sub);
            Err(AppError::unauthorized())
        }
    }
}

/// Extractor fallback for handlers reached outside the auth middleware.
/// The middleware normally populates extensions first.
impl FromRequestParts<ServerState> for CurrentAccount {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted (from middleware)
        if let Some(current) = parts.extensions.get::<CurrentAccount>() {
            return Ok(current.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => JwtService::extract_from_header(header)
                .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
            None => {
                security_log!("WARN", "auth_missing", uri = format!("{:?}", parts.uri));
                return Err(AppError::unauthorized());
            }
        };

        let current = resolve_account(state, token).await?;

        // Store in extensions for potential reuse
        parts.extensions.insert(current.clone());

        Ok(current)
    }
}
