//! Studio (tenant) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vowdesk_core::types::{DbId, Timestamp};

/// Full studio row from the `studios` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Studio {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Compact studio shape embedded in session payloads.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudioSummary {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a studio (used by seeding and tests; there is no
/// self-service studio signup endpoint).
#[derive(Debug, Deserialize)]
pub struct CreateStudio {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// DTO for updating studio settings. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStudioSettings {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
}
