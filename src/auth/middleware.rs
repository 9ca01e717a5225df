//! Authentication middleware for Axum

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use sqlx::SqlitePool;
use thiserror::Error;
use wardrobe_user::UserRecord;

use super::jwt::{self, Claims};
use super::ACCESS_TOKEN_COOKIE;
use crate::config::JwtConfig;
use crate::error::AppError;
use crate::routes::AppState;

/// Authenticated principal: the directory record plus the decoded token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: UserRecord,
    pub claims: Claims,
}

/// Why a presented credential was refused
#[derive(Debug, Clone, Error)]
pub enum AuthRejection {
    #[error("invalid or expired access token")]
    InvalidToken,

    #[error("user not found")]
    UserNotFound,

    #[error("user is blocked or inactive")]
    UserInactive,
}

/// Per-request authentication outcome
///
/// `NoCredential` is not a failure: a request without the access-token
/// cookie proceeds anonymously and route policy decides what it may reach.
#[derive(Debug)]
pub enum AuthOutcome {
    NoCredential,
    Authenticated(AuthUser),
    Rejected(AuthRejection),
}

/// Classify the request's access-token cookie
///
/// One directory read, no retained state. Every decode failure maps to the
/// single generic token rejection; a directory error is logged and collapsed
/// into the same rejection.
pub async fn authenticate(jar: &CookieJar, config: &JwtConfig, pool: &SqlitePool) -> AuthOutcome {
    let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) else {
        return AuthOutcome::NoCredential;
    };

    let claims = match jwt::validate_token(cookie.value(), config) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid or expired access token");
            return AuthOutcome::Rejected(AuthRejection::InvalidToken);
        }
    };

    let user = match wardrobe_user::find_by_id(pool, claims.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!(
                user_id = claims.user_id,
                "Access token references unknown user"
            );
            return AuthOutcome::Rejected(AuthRejection::UserNotFound);
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                user_id = claims.user_id,
                "User directory lookup failed"
            );
            return AuthOutcome::Rejected(AuthRejection::InvalidToken);
        }
    };

    if !user.is_active {
        tracing::warn!(
            user_id = user.id,
            "Blocked or inactive user presented a valid token"
        );
        return AuthOutcome::Rejected(AuthRejection::UserInactive);
    }

    AuthOutcome::Authenticated(AuthUser { user, claims })
}

/// Authentication middleware for protected routes
///
/// On success the authenticated user is inserted into request extensions for
/// handlers and extractors downstream. Requests without a credential are
/// refused here rather than passed through.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match authenticate(&jar, &state.config.jwt, &state.pool).await {
        AuthOutcome::Authenticated(auth_user) => {
            tracing::debug!(user_id = auth_user.user.id, "User authenticated");
            request.extensions_mut().insert(auth_user);
            Ok(next.run(request).await)
        }
        AuthOutcome::NoCredential => Err(AppError::AuthenticationRequired),
        AuthOutcome::Rejected(rejection) => Err(AppError::AuthenticationFailed(rejection)),
    }
}
