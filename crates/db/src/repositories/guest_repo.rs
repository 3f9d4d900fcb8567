//! Repository for the `guests` table.
//!
//! Guests are tenant-scoped transitively: every lookup joins through the
//! owning event's `studio_id`.

use sqlx::PgPool;
use vowdesk_core::types::{DbId, Timestamp};

use crate::models::guest::{BulkGuestRow, CreateGuest, Guest, GuestCategory, GuestListRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, name, phone, email, category, invitation_code, \
                       checked_in, checked_in_at, created_at";

/// Cap on studio-wide guest listings.
const STUDIO_LIST_LIMIT: i64 = 100;

/// Provides event- and studio-scoped CRUD operations for guests.
pub struct GuestRepo;

impl GuestRepo {
    /// Insert a new guest. The caller must have verified that the event
    /// belongs to the requesting studio.
    pub async fn create(pool: &PgPool, input: &CreateGuest) -> Result<Guest, sqlx::Error> {
        let query = format!(
            "INSERT INTO guests (event_id, name, phone, email, category, invitation_code)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(input.event_id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.category.unwrap_or(GuestCategory::General))
            .bind(&input.invitation_code)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch of guests for one event inside a single
    /// transaction: either every row is created or none are. A failure on
    /// any row (e.g. a duplicate invitation code) rolls the batch back.
    pub async fn create_bulk(
        pool: &PgPool,
        event_id: DbId,
        rows: &[BulkGuestRow],
    ) -> Result<Vec<Guest>, sqlx::Error> {
        let query = format!(
            "INSERT INTO guests (event_id, name, phone, email, invitation_code)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(rows.len());
        for row in rows {
            let guest = sqlx::query_as::<_, Guest>(&query)
                .bind(event_id)
                .bind(&row.name)
                .bind(&row.phone)
                .bind(&row.email)
                .bind(&row.invitation_code)
                .fetch_one(&mut *tx)
                .await?;
            created.push(guest);
        }
        tx.commit().await?;
        Ok(created)
    }

    /// Find a guest whose event belongs to the given studio.
    pub async fn find_in_studio(
        pool: &PgPool,
        studio_id: DbId,
        guest_id: DbId,
    ) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!(
            "SELECT g.{} FROM guests g
             JOIN events e ON e.id = g.event_id
             WHERE g.id = $1 AND e.studio_id = $2",
            COLUMNS.replace(", ", ", g.")
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(guest_id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// List the guests of one event, newest first.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Guest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM guests
             WHERE event_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// List guests across all of a studio's events, newest first, capped
    /// at 100 rows.
    pub async fn list_by_studio(
        pool: &PgPool,
        studio_id: DbId,
    ) -> Result<Vec<GuestListRow>, sqlx::Error> {
        let query = format!(
            "SELECT g.{}, e.title AS event_title
             FROM guests g
             JOIN events e ON e.id = g.event_id
             WHERE e.studio_id = $1
             ORDER BY g.created_at DESC
             LIMIT $2",
            COLUMNS.replace(", ", ", g.")
        );
        sqlx::query_as::<_, GuestListRow>(&query)
            .bind(studio_id)
            .bind(STUDIO_LIST_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update to a guest. Check-in fields are passed as
    /// resolved values because their transition depends on the previous
    /// state (see the guests handler).
    pub async fn update(
        pool: &PgPool,
        guest_id: DbId,
        name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
        category: Option<GuestCategory>,
        invitation_code: Option<&str>,
        checked_in: bool,
        checked_in_at: Option<Timestamp>,
    ) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!(
            "UPDATE guests SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email),
                category = COALESCE($5, category),
                invitation_code = COALESCE($6, invitation_code),
                checked_in = $7,
                checked_in_at = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(guest_id)
            .bind(name)
            .bind(phone)
            .bind(email)
            .bind(category)
            .bind(invitation_code)
            .bind(checked_in)
            .bind(checked_in_at)
            .fetch_optional(pool)
            .await
    }

    /// Mark a guest as checked in. Idempotent: the first check-in stamps
    /// `checked_in_at`, repeated calls keep the original stamp.
    pub async fn check_in(pool: &PgPool, guest_id: DbId) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!(
            "UPDATE guests SET
                checked_in = TRUE,
                checked_in_at = COALESCE(checked_in_at, NOW())
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(guest_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a guest. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, guest_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(guest_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
