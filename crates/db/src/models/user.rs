//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vowdesk_core::roles::{Role, TeamRole};
use vowdesk_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`TeamMember`] or a session payload for external output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub phone: String,
    pub password_hash: String,
    pub role: Role,
    pub team_role: TeamRole,
    pub studio_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for team-management responses (no hash).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: DbId,
    pub phone: String,
    pub role: Role,
    pub team_role: TeamRole,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The password is hashed by the caller
/// before it reaches the repository.
#[derive(Debug)]
pub struct CreateUser {
    pub phone: String,
    pub password_hash: String,
    pub role: Role,
    pub team_role: TeamRole,
    pub studio_id: DbId,
}

/// Partial update applied to a team member. `None` fields are unchanged.
#[derive(Debug, Default)]
pub struct UpdateTeamMember {
    pub phone: Option<String>,
    pub team_role: Option<TeamRole>,
    pub password_hash: Option<String>,
}

/// Partial update applied to the caller's own account.
#[derive(Debug, Default)]
pub struct UpdateAccount {
    pub phone: Option<String>,
    pub password_hash: Option<String>,
}
