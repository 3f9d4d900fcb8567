//! Integration tests for event media metadata.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_studio, create_test_user, delete_with_cookie, get_with_cookie, login,
    patch_json_with_cookie, post_json_with_cookie,
};
use sqlx::PgPool;
use vowdesk_core::roles::Role;
use vowdesk_core::types::DbId;
use vowdesk_db::models::event::CreateEvent;
use vowdesk_db::models::template::{CreateTemplate, TemplateCategory};
use vowdesk_db::repositories::{EventRepo, TemplateRepo};

async fn seed_event(pool: &PgPool, studio_id: DbId, slug: &str) -> DbId {
    let template = TemplateRepo::create(
        pool,
        &CreateTemplate {
            name: format!("Template {slug}"),
            slug: format!("tpl-{slug}"),
            category: TemplateCategory::Religious,
            preview_image: None,
            is_active: Some(true),
        },
    )
    .await
    .expect("template creation should succeed");

    EventRepo::create(
        pool,
        studio_id,
        &CreateEvent {
            template_id: template.id,
            title: format!("Wedding {slug}"),
            bride_name: None,
            groom_name: None,
            bride_phone: "08011111111".to_string(),
            groom_phone: "08022222222".to_string(),
            event_date: chrono::Utc::now() + chrono::Duration::days(30),
            location: None,
            description: None,
            cover_image: None,
            slug: slug.to_string(),
            subdomain: None,
            is_published: None,
        },
    )
    .await
    .expect("event creation should succeed")
    .id
}

/// Create then list media for one event; the wire field is `type`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_list_media(pool: PgPool) {
    let studio_id = create_test_studio(&pool, "Studio").await;
    create_test_user(&pool, studio_id, "08160000001", Role::Staff).await;
    let event_id = seed_event(&pool, studio_id, "gallery").await;

    let app = common::build_test_app(pool);
    let cookie = login(app.clone(), "08160000001").await;

    let body = serde_json::json!({
        "eventId": event_id,
        "type": "IMAGE",
        "url": "https://cdn.example.com/shots/001.jpg"
    });
    let response = post_json_with_cookie(app.clone(), "/api/studio/media", &cookie, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["media"]["type"], "IMAGE");

    let response = get_with_cookie(
        app,
        &format!("/api/studio/media?eventId={event_id}"),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let media = &json["media"];
    assert_eq!(media.as_array().unwrap().len(), 1);
    assert_eq!(media[0]["url"], "https://cdn.example.com/shots/001.jpg");
    assert_eq!(media[0]["event"]["id"], event_id.to_string());
}

/// Listing without eventId or scope=studio is a 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_requires_scope(pool: PgPool) {
    let studio_id = create_test_studio(&pool, "Studio").await;
    create_test_user(&pool, studio_id, "08160000002", Role::Staff).await;
    let app = common::build_test_app(pool);

    let cookie = login(app.clone(), "08160000002").await;
    let response = get_with_cookie(app, "/api/studio/media", &cookie).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Media behind another studio's event is invisible.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_cross_studio_media_not_found(pool: PgPool) {
    let studio_a = create_test_studio(&pool, "Studio A").await;
    let studio_b = create_test_studio(&pool, "Studio B").await;
    create_test_user(&pool, studio_a, "08160000003", Role::Admin).await;
    let foreign_event = seed_event(&pool, studio_b, "their-gallery").await;

    let media_id: (DbId,) = sqlx::query_as(
        "INSERT INTO media (event_id, type, url)
         VALUES ($1, 'VIDEO', 'https://cdn.example.com/v.mp4') RETURNING id",
    )
    .bind(foreign_event)
    .fetch_one(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let cookie = login(app.clone(), "08160000003").await;
    let path = format!("/api/studio/media/{}", media_id.0);

    let response = get_with_cookie(app.clone(), &path, &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_with_cookie(app, &path, &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// PATCH flips the media type without touching the url.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_media(pool: PgPool) {
    let studio_id = create_test_studio(&pool, "Studio").await;
    create_test_user(&pool, studio_id, "08160000004", Role::Staff).await;
    let event_id = seed_event(&pool, studio_id, "editable").await;

    let media_id: (DbId,) = sqlx::query_as(
        "INSERT INTO media (event_id, type, url)
         VALUES ($1, 'IMAGE', 'https://cdn.example.com/a.jpg') RETURNING id",
    )
    .bind(event_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let cookie = login(app.clone(), "08160000004").await;

    let response = patch_json_with_cookie(
        app,
        &format!("/api/studio/media/{}", media_id.0),
        &cookie,
        serde_json::json!({ "type": "VIDEO" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["media"]["type"], "VIDEO");
    assert_eq!(json["media"]["url"], "https://cdn.example.com/a.jpg");
}
