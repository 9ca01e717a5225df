use axum::Json;
use serde::Serialize;

use crate::auth::MaybeAuthUser;

#[derive(Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub user: Option<SessionUser>,
}

#[derive(Serialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub full_name: String,
}

/// GET /session - Report whether the request carries a valid identity
///
/// Anonymous requests are a normal outcome here, not an error.
pub async fn show(MaybeAuthUser(auth_user): MaybeAuthUser) -> Json<SessionResponse> {
    let user = auth_user.map(|auth_user| SessionUser {
        id: auth_user.user.id,
        email: auth_user.user.email,
        full_name: auth_user.user.full_name,
    });

    Json(SessionResponse {
        authenticated: user.is_some(),
        user,
    })
}
