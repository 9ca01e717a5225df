/// User row from the `users` read model table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
    pub created_at: i64,
    pub last_login_at: Option<i64>,
}
