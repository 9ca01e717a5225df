use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthRejection;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("authentication credentials were not provided")]
    AuthenticationRequired,

    #[error("{0}")]
    AuthenticationFailed(#[from] AuthRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::DatabaseError(e) => {
                tracing::error!("Database error: {:?}", e);
                // Generic message, don't leak database internals
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::AuthenticationRequired => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::AuthenticationFailed(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
