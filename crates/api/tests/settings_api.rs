//! Integration tests for account settings and notification preferences.

mod common;

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use common::{
    body_json, create_test_studio, create_test_user, get_with_cookie, login,
    patch_json_with_cookie, post_json, TEST_PASSWORD,
};
use sqlx::PgPool;
use vowdesk_core::roles::Role;

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// GET returns the caller's profile and studio record.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_account(pool: PgPool) {
    let studio_id = create_test_studio(&pool, "Aurora Weddings").await;
    let user = create_test_user(&pool, studio_id, "08180000001", Role::Staff).await;
    let app = common::build_test_app(pool);

    let cookie = login(app.clone(), "08180000001").await;
    let response = get_with_cookie(app, "/api/studio/settings/account", &cookie).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["id"], user.id.to_string());
    assert_eq!(json["user"]["teamRole"], "EDITOR");
    assert_eq!(json["studio"]["name"], "Aurora Weddings");
}

/// Changing the password requires knowing the current one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_password_change_requires_current(pool: PgPool) {
    let studio_id = create_test_studio(&pool, "Studio").await;
    create_test_user(&pool, studio_id, "08180000002", Role::Staff).await;
    let app = common::build_test_app(pool);

    let cookie = login(app.clone(), "08180000002").await;

    // Missing current password.
    let response = patch_json_with_cookie(
        app.clone(),
        "/api/studio/settings/account",
        &cookie,
        serde_json::json!({ "newPassword": "next-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Current password is required to set a new password"
    );

    // Wrong current password.
    let response = patch_json_with_cookie(
        app.clone(),
        "/api/studio/settings/account",
        &cookie,
        serde_json::json!({ "currentPassword": "guess", "newPassword": "next-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Current password is incorrect");

    // Correct current password.
    let response = patch_json_with_cookie(
        app.clone(),
        "/api/studio/settings/account",
        &cookie,
        serde_json::json!({ "currentPassword": TEST_PASSWORD, "newPassword": "next-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "phone": "08180000002", "password": "next-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Studio fields are writable by admins only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_studio_fields_admin_only(pool: PgPool) {
    let studio_id = create_test_studio(&pool, "Old Name").await;
    create_test_user(&pool, studio_id, "08180000003", Role::Admin).await;
    create_test_user(&pool, studio_id, "08180000004", Role::Staff).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "studioName": "New Name", "studioPrimaryColor": "#7c3aed" });

    let staff_cookie = login(app.clone(), "08180000004").await;
    let response = patch_json_with_cookie(
        app.clone(),
        "/api/studio/settings/account",
        &staff_cookie,
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin_cookie = login(app.clone(), "08180000003").await;
    let response =
        patch_json_with_cookie(app, "/api/studio/settings/account", &admin_cookie, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["studio"]["name"], "New Name");
    assert_eq!(json["studio"]["primaryColor"], "#7c3aed");
}

// ---------------------------------------------------------------------------
// Notification preferences
// ---------------------------------------------------------------------------

/// Without a stored cookie the defaults come back.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_notification_defaults(pool: PgPool) {
    let studio_id = create_test_studio(&pool, "Studio").await;
    create_test_user(&pool, studio_id, "08180000005", Role::Staff).await;
    let app = common::build_test_app(pool);

    let cookie = login(app.clone(), "08180000005").await;
    let response = get_with_cookie(app, "/api/studio/settings/notifications", &cookie).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["preferences"]["rsvpUpdates"], true);
    assert_eq!(json["preferences"]["checkInAlerts"], true);
    assert_eq!(json["preferences"]["weeklySummary"], false);
}

/// PATCH persists the preferences into their own cookie and they read
/// back on the next request.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_notification_roundtrip(pool: PgPool) {
    let studio_id = create_test_studio(&pool, "Studio").await;
    create_test_user(&pool, studio_id, "08180000006", Role::Staff).await;
    let app = common::build_test_app(pool);

    let session = login(app.clone(), "08180000006").await;
    let response = patch_json_with_cookie(
        app.clone(),
        "/api/studio/settings/notifications",
        &session,
        serde_json::json!({
            "rsvpUpdates": false,
            "checkInAlerts": true,
            "draftReminders": false,
            "mediaUploads": true,
            "weeklySummary": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("preferences must be written to a cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("studio_notifications="));
    assert!(set_cookie.contains("HttpOnly"));
    let prefs_cookie = set_cookie.split(';').next().unwrap();

    // Send both cookies, the way a browser would.
    let combined = format!("{session}; {prefs_cookie}");
    let response =
        get_with_cookie(app, "/api/studio/settings/notifications", &combined).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["preferences"]["rsvpUpdates"], false);
    assert_eq!(json["preferences"]["weeklySummary"], true);
}
