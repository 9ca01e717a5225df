//! Request extractors for handlers behind and outside the auth middleware

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use super::middleware::{authenticate, AuthOutcome, AuthUser};
use crate::error::AppError;
use crate::routes::AppState;

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    // Reads the identity placed in request extensions by `require_auth`
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AppError::AuthenticationRequired)
    }
}

/// Optional identity for public endpoints
///
/// `None` for anonymous requests. A request that presents a cookie but fails
/// authentication is refused outright, the same as on protected routes.
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::AuthenticationRequired)?;

        match authenticate(&jar, &state.config.jwt, &state.pool).await {
            AuthOutcome::Authenticated(auth_user) => Ok(Self(Some(auth_user))),
            AuthOutcome::NoCredential => Ok(Self(None)),
            AuthOutcome::Rejected(rejection) => Err(AppError::AuthenticationFailed(rejection)),
        }
    }
}
