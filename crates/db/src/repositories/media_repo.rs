//! Repository for the `media` table.
//!
//! Media assets are tenant-scoped transitively through the owning event.

use sqlx::PgPool;
use vowdesk_core::types::DbId;

use crate::models::media::{CreateMedia, Media, MediaListRow, UpdateMedia};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, type, url, created_at";

/// Cap on studio-wide media listings.
const STUDIO_LIST_LIMIT: i64 = 200;

/// Provides event- and studio-scoped CRUD operations for media assets.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a new media asset. The caller must have verified that the
    /// event belongs to the requesting studio.
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (event_id, type, url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(input.event_id)
            .bind(input.media_type)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// Find a media asset whose event belongs to the given studio.
    pub async fn find_in_studio(
        pool: &PgPool,
        studio_id: DbId,
        media_id: DbId,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "SELECT m.{} FROM media m
             JOIN events e ON e.id = m.event_id
             WHERE m.id = $1 AND e.studio_id = $2",
            COLUMNS.replace(", ", ", m.")
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(media_id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// List the media of one event with its event reference, newest first.
    pub async fn list_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<MediaListRow>, sqlx::Error> {
        let query = format!(
            "SELECT m.{}, e.title AS event_title
             FROM media m
             JOIN events e ON e.id = m.event_id
             WHERE m.event_id = $1
             ORDER BY m.created_at DESC",
            COLUMNS.replace(", ", ", m.")
        );
        sqlx::query_as::<_, MediaListRow>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// List plain media rows of one event (used for event detail).
    pub async fn list_rows_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media
             WHERE event_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// List media across all of a studio's events, newest first, capped
    /// at 200 rows.
    pub async fn list_by_studio(
        pool: &PgPool,
        studio_id: DbId,
    ) -> Result<Vec<MediaListRow>, sqlx::Error> {
        let query = format!(
            "SELECT m.{}, e.title AS event_title
             FROM media m
             JOIN events e ON e.id = m.event_id
             WHERE e.studio_id = $1
             ORDER BY m.created_at DESC
             LIMIT $2",
            COLUMNS.replace(", ", ", m.")
        );
        sqlx::query_as::<_, MediaListRow>(&query)
            .bind(studio_id)
            .bind(STUDIO_LIST_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Update a media asset. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        media_id: DbId,
        input: &UpdateMedia,
    ) -> Result<Option<Media>, sqlx::Error> {
        let query = format!(
            "UPDATE media SET
                type = COALESCE($2, type),
                url = COALESCE($3, url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(media_id)
            .bind(input.media_type)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a media asset. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, media_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(media_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
