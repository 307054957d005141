#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::PgPool;
use tower::ServiceExt;

use wikifarm_api::auth::jwt::{Claims, JwtConfig};
use wikifarm_api::config::ServerConfig;
use wikifarm_api::router::build_app_router;
use wikifarm_api::state::AppState;
use wikifarm_core::types::DbId;
use wikifarm_core::wiki::WikiSetting;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and the default 8 MiB result budget.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        hosting_domain: "shoutwiki.com".to_string(),
        max_result_size: wikifarm_core::listing::DEFAULT_MAX_RESULT_SIZE,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a GET request without credentials.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a GET request with a bearer token.
pub async fn get_as(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Mint a caller token signed with [`TEST_JWT_SECRET`].
pub fn token_for(user_id: DbId, groups: &[&str]) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        groups: groups.iter().map(|g| g.to_string()).collect(),
        exp: now + 900,
        iat: now,
        jti: uuid::Uuid::new_v4().to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Midnight UTC on the given day of July 2013.
pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2013, 7, d, 0, 0, 0).unwrap()
}

pub async fn insert_wiki(pool: &PgPool, id: DbId, created: DateTime<Utc>, deleted: bool) {
    sqlx::query("INSERT INTO wiki_list (wl_id, wl_timestamp, wl_deleted) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(created)
        .bind(deleted)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn set_setting(pool: &PgPool, id: DbId, setting: WikiSetting, value: &str) {
    sqlx::query("INSERT INTO wiki_settings (ws_wiki, ws_setting, ws_value) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(setting.key())
        .bind(value)
        .execute(pool)
        .await
        .unwrap();
}

/// Insert a live wiki with a full set of settings.
pub async fn insert_full_wiki(pool: &PgPool, id: DbId, created: DateTime<Utc>, wiki_type: &str) {
    insert_wiki(pool, id, created, false).await;
    set_setting(pool, id, WikiSetting::LanguageCode, "en").await;
    set_setting(pool, id, WikiSetting::Sitename, &format!("Wiki {id}")).await;
    set_setting(pool, id, WikiSetting::Description, "A test wiki").await;
    set_setting(pool, id, WikiSetting::Category, "gaming").await;
    set_setting(pool, id, WikiSetting::FullSubdomain, &format!("wiki{id}")).await;
    set_setting(pool, id, WikiSetting::WikiType, wiki_type).await;
}
