use axum::Json;
use serde::Serialize;

use crate::auth::AuthUser;

#[derive(Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub created_at: i64,
    pub last_login_at: Option<i64>,
}

/// GET /account - Profile of the authenticated user
pub async fn show(auth_user: AuthUser) -> Json<AccountResponse> {
    let user = auth_user.user;

    Json(AccountResponse {
        id: user.id,
        email: user.email,
        full_name: user.full_name,
        created_at: user.created_at,
        last_login_at: user.last_login_at,
    })
}
