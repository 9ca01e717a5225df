use axum::body::Body;
use axum::http::Response;
use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::time::{SystemTime, UNIX_EPOCH};
use wardrobe::auth::Claims;
use wardrobe::config::{
    Config, DatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig,
};
use wardrobe::routes::{router, AppState};

pub const TEST_JWT_SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            issuer: "wardrobe".to_string(),
            audience: "wardrobe-storefront".to_string(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn create_test_app(pool: SqlitePool) -> Router {
    let state = AppState {
        config: test_config(),
        pool,
    };

    router(state)
}

pub async fn insert_user(pool: &SqlitePool, id: i64, email: &str, is_active: bool) {
    sqlx::query(
        "INSERT INTO users (id, email, full_name, is_active, created_at, last_login_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(id)
    .bind(email)
    .bind("Test User")
    .bind(is_active)
    .bind(1_700_000_000_i64)
    .bind(Option::<i64>::None)
    .execute(pool)
    .await
    .expect("Failed to insert user");
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}

pub fn sign_token(user_id: i64) -> String {
    sign_token_with(user_id, TEST_JWT_SECRET, unix_now() + 3600)
}

pub fn sign_expired_token(user_id: i64) -> String {
    sign_token_with(user_id, TEST_JWT_SECRET, unix_now() - 3600)
}

pub fn sign_token_with(user_id: i64, secret: &str, exp: u64) -> String {
    let claims = Claims {
        user_id,
        exp,
        iat: unix_now(),
        iss: "wardrobe".to_string(),
        aud: "wardrobe-storefront".to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}
