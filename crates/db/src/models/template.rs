//! Invitation template entity model and DTOs.
//!
//! Templates form a global catalogue shared by every studio; they carry
//! no `studio_id` and are readable by any authenticated member. Writes
//! are restricted to ADMIN users at the handler layer.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vowdesk_core::types::{DbId, Timestamp};

/// Visual category of an invitation template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "template_category")]
pub enum TemplateCategory {
    #[sqlx(rename = "TRADITIONAL")]
    Traditional,
    #[sqlx(rename = "MODERN")]
    Modern,
    #[sqlx(rename = "RELIGIOUS")]
    Religious,
}

/// Full template row from the `templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub category: TemplateCategory,
    pub preview_image: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Template row joined with the number of events using it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateWithUsage {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub template: Template,
    pub event_count: i64,
}

/// DTO for creating a template.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplate {
    pub name: String,
    pub slug: String,
    pub category: TemplateCategory,
    pub preview_image: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating a template. All fields are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub category: Option<TemplateCategory>,
    pub preview_image: Option<String>,
    pub is_active: Option<bool>,
}
