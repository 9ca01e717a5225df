use sqlx::SqlitePool;

use crate::record::UserRecord;

/// Get user by ID
pub async fn find_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(
        "SELECT id, email, full_name, is_active, created_at, last_login_at
         FROM users
         WHERE id = ?1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Get user by email
pub async fn find_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(
        "SELECT id, email, full_name, is_active, created_at, last_login_at
         FROM users
         WHERE email = ?1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}
