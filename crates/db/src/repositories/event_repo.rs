//! Repository for the `events` table.
//!
//! Every read and write here is studio-scoped: the `studio_id` predicate
//! makes cross-tenant events invisible, so callers report "not found"
//! rather than "forbidden" for foreign ids.

use sqlx::PgPool;
use vowdesk_core::types::DbId;

use crate::models::event::{CreateEvent, Event, EventListRow, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, studio_id, template_id, title, bride_name, groom_name, bride_phone, \
                       groom_phone, event_date, location, description, cover_image, slug, \
                       subdomain, is_published, created_at, updated_at";

/// Provides studio-scoped CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event owned by the given studio.
    pub async fn create(
        pool: &PgPool,
        studio_id: DbId,
        input: &CreateEvent,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (studio_id, template_id, title, bride_name, groom_name,
                                 bride_phone, groom_phone, event_date, location, description,
                                 cover_image, slug, subdomain, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(studio_id)
            .bind(input.template_id)
            .bind(&input.title)
            .bind(&input.bride_name)
            .bind(&input.groom_name)
            .bind(&input.bride_phone)
            .bind(&input.groom_phone)
            .bind(input.event_date)
            .bind(&input.location)
            .bind(&input.description)
            .bind(&input.cover_image)
            .bind(&input.slug)
            .bind(&input.subdomain)
            .bind(input.is_published.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Find an event belonging to the given studio.
    pub async fn find_in_studio(
        pool: &PgPool,
        studio_id: DbId,
        event_id: DbId,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1 AND studio_id = $2");
        sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether an event exists within the given studio.
    pub async fn exists_in_studio(
        pool: &PgPool,
        studio_id: DbId,
        event_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM events WHERE id = $1 AND studio_id = $2")
                .bind(event_id)
                .bind(studio_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }

    /// List a studio's events with template details and guest/media
    /// counts, newest first.
    pub async fn list_by_studio(
        pool: &PgPool,
        studio_id: DbId,
    ) -> Result<Vec<EventListRow>, sqlx::Error> {
        let query = "SELECT e.*,
                    t.name AS t_name, t.slug AS t_slug, t.category AS t_category,
                    t.preview_image AS t_preview_image, t.is_active AS t_is_active,
                    t.created_at AS t_created_at, t.updated_at AS t_updated_at,
                    (SELECT COUNT(*) FROM guests g WHERE g.event_id = e.id) AS guest_count,
                    (SELECT COUNT(*) FROM media m WHERE m.event_id = e.id) AS media_count
             FROM events e
             JOIN templates t ON t.id = e.template_id
             WHERE e.studio_id = $1
             ORDER BY e.created_at DESC";
        sqlx::query_as::<_, EventListRow>(query)
            .bind(studio_id)
            .fetch_all(pool)
            .await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    ///
    /// Scoped to the studio: returns `None` for cross-tenant ids.
    pub async fn update(
        pool: &PgPool,
        studio_id: DbId,
        event_id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                template_id = COALESCE($3, template_id),
                title = COALESCE($4, title),
                bride_name = COALESCE($5, bride_name),
                groom_name = COALESCE($6, groom_name),
                bride_phone = COALESCE($7, bride_phone),
                groom_phone = COALESCE($8, groom_phone),
                event_date = COALESCE($9, event_date),
                location = COALESCE($10, location),
                description = COALESCE($11, description),
                cover_image = COALESCE($12, cover_image),
                slug = COALESCE($13, slug),
                subdomain = COALESCE($14, subdomain),
                is_published = COALESCE($15, is_published),
                updated_at = NOW()
             WHERE id = $1 AND studio_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .bind(studio_id)
            .bind(input.template_id)
            .bind(&input.title)
            .bind(&input.bride_name)
            .bind(&input.groom_name)
            .bind(&input.bride_phone)
            .bind(&input.groom_phone)
            .bind(input.event_date)
            .bind(&input.location)
            .bind(&input.description)
            .bind(&input.cover_image)
            .bind(&input.slug)
            .bind(&input.subdomain)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event within the given studio. Child guests and media
    /// rows are removed by cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        studio_id: DbId,
        event_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1 AND studio_id = $2")
            .bind(event_id)
            .bind(studio_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
