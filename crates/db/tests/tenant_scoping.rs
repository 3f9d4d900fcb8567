//! Repository-level tests for tenant scoping and transactional behavior.

use sqlx::PgPool;
use vowdesk_core::roles::{Role, TeamRole};
use vowdesk_core::types::DbId;
use vowdesk_db::models::event::CreateEvent;
use vowdesk_db::models::guest::{BulkGuestRow, CreateGuest};
use vowdesk_db::models::studio::CreateStudio;
use vowdesk_db::models::template::{CreateTemplate, TemplateCategory};
use vowdesk_db::models::user::CreateUser;
use vowdesk_db::repositories::{EventRepo, GuestRepo, StudioRepo, TemplateRepo, UserRepo};

async fn seed_studio(pool: &PgPool, name: &str) -> DbId {
    StudioRepo::create(
        pool,
        &CreateStudio {
            name: name.to_string(),
            email: None,
            phone: None,
        },
    )
    .await
    .expect("studio creation should succeed")
    .id
}

async fn seed_event(pool: &PgPool, studio_id: DbId, slug: &str) -> DbId {
    let template = TemplateRepo::create(
        pool,
        &CreateTemplate {
            name: format!("Template {slug}"),
            slug: format!("tpl-{slug}"),
            category: TemplateCategory::Traditional,
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
            event_date: chrono::Utc::now() + chrono::Duration::days(14),
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

/// Events are only visible through their owning studio's scope.
#[sqlx::test(migrations = "./migrations")]
async fn test_event_scoping(pool: PgPool) {
    let studio_a = seed_studio(&pool, "A").await;
    let studio_b = seed_studio(&pool, "B").await;
    let event_id = seed_event(&pool, studio_a, "scoped").await;

    let own = EventRepo::find_in_studio(&pool, studio_a, event_id)
        .await
        .unwrap();
    assert!(own.is_some());

    let foreign = EventRepo::find_in_studio(&pool, studio_b, event_id)
        .await
        .unwrap();
    assert!(foreign.is_none(), "foreign studios must not see the event");

    assert!(!EventRepo::exists_in_studio(&pool, studio_b, event_id)
        .await
        .unwrap());
    assert!(
        !EventRepo::delete(&pool, studio_b, event_id).await.unwrap(),
        "scoped delete must not remove a foreign event"
    );
}

/// Guest lookups join through the event to enforce tenancy.
#[sqlx::test(migrations = "./migrations")]
async fn test_guest_scoping_through_event(pool: PgPool) {
    let studio_a = seed_studio(&pool, "A").await;
    let studio_b = seed_studio(&pool, "B").await;
    let event_id = seed_event(&pool, studio_a, "with-guest").await;

    let guest = GuestRepo::create(
        &pool,
        &CreateGuest {
            event_id,
            name: "Ngozi".to_string(),
            phone: None,
            email: None,
            category: None,
            invitation_code: "INV-1".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(GuestRepo::find_in_studio(&pool, studio_a, guest.id)
        .await
        .unwrap()
        .is_some());
    assert!(GuestRepo::find_in_studio(&pool, studio_b, guest.id)
        .await
        .unwrap()
        .is_none());
}

/// A duplicate invitation code rolls back the whole bulk insert.
#[sqlx::test(migrations = "./migrations")]
async fn test_bulk_create_rolls_back(pool: PgPool) {
    let studio = seed_studio(&pool, "A").await;
    let event_id = seed_event(&pool, studio, "bulked").await;

    let rows = vec![
        BulkGuestRow {
            name: "One".to_string(),
            phone: None,
            email: None,
            invitation_code: "SAME".to_string(),
        },
        BulkGuestRow {
            name: "Two".to_string(),
            phone: None,
            email: None,
            invitation_code: "SAME".to_string(),
        },
    ];

    let result = GuestRepo::create_bulk(&pool, event_id, &rows).await;
    assert!(result.is_err(), "duplicate codes must fail the batch");

    let remaining = GuestRepo::list_by_event(&pool, event_id).await.unwrap();
    assert!(remaining.is_empty(), "the failed batch must leave no rows");
}

/// Check-in keeps the first timestamp across repeats.
#[sqlx::test(migrations = "./migrations")]
async fn test_check_in_keeps_first_stamp(pool: PgPool) {
    let studio = seed_studio(&pool, "A").await;
    let event_id = seed_event(&pool, studio, "door").await;

    let guest = GuestRepo::create(
        &pool,
        &CreateGuest {
            event_id,
            name: "Arrival".to_string(),
            phone: None,
            email: None,
            category: None,
            invitation_code: "INV-2".to_string(),
        },
    )
    .await
    .unwrap();

    let first = GuestRepo::check_in(&pool, guest.id).await.unwrap().unwrap();
    assert!(first.checked_in);
    let stamp = first.checked_in_at.expect("first check-in must stamp");

    let second = GuestRepo::check_in(&pool, guest.id).await.unwrap().unwrap();
    assert_eq!(second.checked_in_at, Some(stamp));
}

/// Team member updates and deletes are scoped to the studio.
#[sqlx::test(migrations = "./migrations")]
async fn test_member_scoping(pool: PgPool) {
    let studio_a = seed_studio(&pool, "A").await;
    let studio_b = seed_studio(&pool, "B").await;

    let member = UserRepo::create(
        &pool,
        &CreateUser {
            phone: "08190000001".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role: Role::Staff,
            team_role: TeamRole::CustomerService,
            studio_id: studio_a,
        },
    )
    .await
    .unwrap();

    assert!(UserRepo::find_member(&pool, studio_a, member.id)
        .await
        .unwrap()
        .is_some());
    assert!(UserRepo::find_member(&pool, studio_b, member.id)
        .await
        .unwrap()
        .is_none());
    assert!(!UserRepo::delete_member(&pool, studio_b, member.id)
        .await
        .unwrap());
}
