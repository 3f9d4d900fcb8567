//! Repository for the `studios` table.

use sqlx::PgPool;
use vowdesk_core::types::DbId;

use crate::models::studio::{CreateStudio, Studio, StudioSummary, UpdateStudioSettings};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, logo_url, primary_color, created_at, updated_at";

/// Provides CRUD operations for studios (tenants).
pub struct StudioRepo;

impl StudioRepo {
    /// Insert a new studio, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudio) -> Result<Studio, sqlx::Error> {
        let query = format!(
            "INSERT INTO studios (name, email, phone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Studio>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a studio by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Studio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM studios WHERE id = $1");
        sqlx::query_as::<_, Studio>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the compact `{id, name}` summary embedded in session payloads.
    pub async fn find_summary(pool: &PgPool, id: DbId) -> Result<Option<StudioSummary>, sqlx::Error> {
        sqlx::query_as::<_, StudioSummary>("SELECT id, name FROM studios WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update studio settings. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_settings(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudioSettings,
    ) -> Result<Option<Studio>, sqlx::Error> {
        let query = format!(
            "UPDATE studios SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                logo_url = COALESCE($5, logo_url),
                primary_color = COALESCE($6, primary_color),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Studio>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.logo_url)
            .bind(&input.primary_color)
            .fetch_optional(pool)
            .await
    }
}
