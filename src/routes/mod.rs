use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::auth::require_auth;
use crate::config::Config;

mod account;
mod health;
mod session;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pool: SqlitePool,
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

pub fn router(app_state: AppState) -> Router {
    // Routes that require an authenticated, active user
    let protected_routes = Router::new()
        .route("/account", get(account::show))
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            Router::new()
                // Public, identity-aware
                .route("/session", get(session::show))
                .merge(protected_routes)
                .fallback(fallback)
                .with_state(app_state),
        )
}
