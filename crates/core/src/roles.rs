//! Role enums for studio members.
//!
//! [`Role`] is the coarse access tier the authorization layer enforces.
//! [`TeamRole`] is a descriptive label shown in team management; no
//! authorization rule reads it.

use serde::{Deserialize, Serialize};

/// Access tier of a studio member. ADMIN unlocks template management,
/// team management, and studio settings; STAFF is the default tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "user_role")]
pub enum Role {
    #[sqlx(rename = "ADMIN")]
    Admin,
    #[sqlx(rename = "STAFF")]
    Staff,
}

/// Descriptive job function of a studio member. Stored and returned
/// verbatim; carries no permission semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "team_role")]
pub enum TeamRole {
    #[sqlx(rename = "EDITOR")]
    Editor,
    #[sqlx(rename = "CUSTOMER_SERVICE")]
    CustomerService,
    #[sqlx(rename = "EVENT_PLANNER")]
    EventPlanner,
    #[sqlx(rename = "PHOTO_CREW")]
    PhotoCrew,
}
