//! Repository for the global `templates` catalogue.

use sqlx::PgPool;
use vowdesk_core::types::DbId;

use crate::models::template::{CreateTemplate, Template, TemplateWithUsage, UpdateTemplate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, category, preview_image, is_active, created_at, updated_at";

/// Provides CRUD operations for invitation templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a new template, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTemplate) -> Result<Template, sqlx::Error> {
        let query = format!(
            "INSERT INTO templates (name, slug, category, preview_image, is_active)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.category)
            .bind(&input.preview_image)
            .bind(input.is_active.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Find a template by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE id = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a template exists and is active (selectable for events).
    pub async fn is_active(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: Option<(bool,)> =
            sqlx::query_as("SELECT is_active FROM templates WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(active,)| active).unwrap_or(false))
    }

    /// List templates with their event usage count, newest first.
    ///
    /// Inactive templates are hidden unless `include_inactive` is set.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<TemplateWithUsage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS},
                    (SELECT COUNT(*) FROM events e WHERE e.template_id = templates.id) AS event_count
             FROM templates
             WHERE is_active = TRUE OR $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, TemplateWithUsage>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a template. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTemplate,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query = format!(
            "UPDATE templates SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                category = COALESCE($4, category),
                preview_image = COALESCE($5, preview_image),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.category)
            .bind(&input.preview_image)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a template. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation if any event still uses the
    /// template; the API layer surfaces that as a conflict.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
