//! Caller identity extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use wikifarm_core::caller::Caller;
use wikifarm_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The identity a listing request is evaluated for.
///
/// Requests without an `Authorization` header are anonymous. A header that
/// is present but malformed, or carries an invalid or expired token, is
/// rejected rather than silently downgraded.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub Caller);

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get("authorization") else {
            return Ok(CallerIdentity(Caller::anonymous()));
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                ))
            })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        tracing::debug!(user_id = claims.sub, jti = %claims.jti, "Caller authenticated");

        Ok(CallerIdentity(Caller::from(claims)))
    }
}
