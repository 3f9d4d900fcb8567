//! Repository for the `users` table.

use sqlx::PgPool;
use vowdesk_core::types::DbId;

use crate::models::user::{CreateUser, TeamMember, UpdateAccount, UpdateTeamMember, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, phone, password_hash, role, team_role, studio_id, created_at, updated_at";

/// Columns safe to expose in team-management responses.
const MEMBER_COLUMNS: &str = "id, phone, role, team_role, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (phone, password_hash, role, team_role, studio_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.phone)
            .bind(&input.password_hash)
            .bind(input.role)
            .bind(input.team_role)
            .bind(input.studio_id)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by phone number (the login identifier).
    pub async fn find_by_phone(pool: &PgPool, phone: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE phone = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(phone)
            .fetch_optional(pool)
            .await
    }

    /// List the members of a studio, most recently created first.
    pub async fn list_members(pool: &PgPool, studio_id: DbId) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!(
            "SELECT {MEMBER_COLUMNS} FROM users
             WHERE studio_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(studio_id)
            .fetch_all(pool)
            .await
    }

    /// Find a member of the given studio. Cross-studio ids return `None`.
    pub async fn find_member(
        pool: &PgPool,
        studio_id: DbId,
        user_id: DbId,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "SELECT {MEMBER_COLUMNS} FROM users
             WHERE id = $1 AND studio_id = $2"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(user_id)
            .bind(studio_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a team member. Only non-`None` fields in `input` are applied.
    ///
    /// Scoped to the studio: returns `None` for cross-studio ids.
    pub async fn update_member(
        pool: &PgPool,
        studio_id: DbId,
        user_id: DbId,
        input: &UpdateTeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                phone = COALESCE($3, phone),
                team_role = COALESCE($4, team_role),
                password_hash = COALESCE($5, password_hash),
                updated_at = NOW()
             WHERE id = $1 AND studio_id = $2
             RETURNING {MEMBER_COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(user_id)
            .bind(studio_id)
            .bind(&input.phone)
            .bind(input.team_role)
            .bind(&input.password_hash)
            .fetch_optional(pool)
            .await
    }

    /// Update the caller's own phone and/or password hash.
    pub async fn update_account(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateAccount,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                phone = COALESCE($2, phone),
                password_hash = COALESCE($3, password_hash),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(&input.phone)
            .bind(&input.password_hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete a member of the given studio.
    ///
    /// Returns `true` if a row was removed; cross-studio ids remove nothing.
    pub async fn delete_member(
        pool: &PgPool,
        studio_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1 AND studio_id = $2")
            .bind(user_id)
            .bind(studio_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
