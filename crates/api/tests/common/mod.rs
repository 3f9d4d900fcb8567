//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the application with the production router so every test
//! exercises the full middleware stack (gatekeeper, CORS, request ID,
//! timeout, panic recovery), plus request helpers that drive it via
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;

use vowdesk_api::auth::jwt::JwtConfig;
use vowdesk_api::auth::password::hash_password;
use vowdesk_api::config::ServerConfig;
use vowdesk_api::router::build_app_router;
use vowdesk_api::state::AppState;
use vowdesk_core::roles::{Role, TeamRole};
use vowdesk_core::types::DbId;
use vowdesk_db::models::studio::CreateStudio;
use vowdesk_db::models::user::{CreateUser, User};
use vowdesk_db::repositories::{StudioRepo, UserRepo};

/// Fixed signing secret for tests.
pub const TEST_JWT_SECRET: &str = "test-secret-which-is-long-enough";

/// Default plaintext password used for seeded users.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        production: false,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            session_ttl_secs: 60 * 60 * 24 * 7,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    path: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    use tower::ServiceExt;

    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None, None).await
}

pub async fn get_with_cookie(app: Router, path: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, path, Some(cookie), None).await
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, path, None, Some(body)).await
}

pub async fn post_json_with_cookie(
    app: Router,
    path: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, path, Some(cookie), Some(body)).await
}

pub async fn patch_json_with_cookie(
    app: Router,
    path: &str,
    cookie: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, path, Some(cookie), Some(body)).await
}

pub async fn delete_with_cookie(app: Router, path: &str, cookie: &str) -> Response<Body> {
    send(app, Method::DELETE, path, Some(cookie), None).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract the session cookie pair (`studio_session=...`) from a
/// response's `Set-Cookie` header, suitable for a `Cookie` request header.
pub fn session_cookie(response: &Response<Body>) -> String {
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("response must set a cookie")
        .to_str()
        .unwrap();
    header
        .split(';')
        .next()
        .expect("cookie header must have a name=value pair")
        .to_string()
}

// ---------------------------------------------------------------------------
// Seeding helpers
// ---------------------------------------------------------------------------

/// Create a studio directly in the database.
pub async fn create_test_studio(pool: &PgPool, name: &str) -> DbId {
    let studio = StudioRepo::create(
        pool,
        &CreateStudio {
            name: name.to_string(),
            email: None,
            phone: None,
        },
    )
    .await
    .expect("studio creation should succeed");
    studio.id
}

/// Create a user directly in the database with [`TEST_PASSWORD`].
pub async fn create_test_user(pool: &PgPool, studio_id: DbId, phone: &str, role: Role) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            phone: phone.to_string(),
            password_hash,
            role,
            team_role: TeamRole::Editor,
            studio_id,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Log in through the API and return the session cookie pair.
pub async fn login(app: Router, phone: &str) -> String {
    let body = serde_json::json!({ "phone": phone, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response)
}

/// Seed a studio with an admin user and log them in.
///
/// Returns `(studio_id, user, session_cookie)`.
pub async fn seed_admin_session(app: Router, pool: &PgPool, phone: &str) -> (DbId, User, String) {
    let studio_id = create_test_studio(pool, &format!("Studio {phone}")).await;
    let user = create_test_user(pool, studio_id, phone, Role::Admin).await;
    let cookie = login(app, phone).await;
    (studio_id, user, cookie)
}
