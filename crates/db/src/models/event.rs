//! Wedding event entity model and DTOs.
//!
//! Events are the tenant boundary for guests and media: both join
//! through `event_id` to reach the owning studio.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vowdesk_core::types::{DbId, Timestamp};

use crate::models::guest::Guest;
use crate::models::media::Media;
use crate::models::template::{Template, TemplateCategory};

/// Full event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub studio_id: DbId,
    pub template_id: DbId,
    pub title: String,
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub bride_phone: String,
    pub groom_phone: String,
    pub event_date: Timestamp,
    pub location: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub slug: String,
    pub subdomain: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Internal row shape for the event list query: the event itself plus
/// aliased template columns and guest/media counts.
#[derive(Debug, FromRow)]
pub struct EventListRow {
    #[sqlx(flatten)]
    pub event: Event,
    pub t_name: String,
    pub t_slug: String,
    pub t_category: TemplateCategory,
    pub t_preview_image: Option<String>,
    pub t_is_active: bool,
    pub t_created_at: Timestamp,
    pub t_updated_at: Timestamp,
    pub guest_count: i64,
    pub media_count: i64,
}

/// Event list entry: the event, its template, and guest/media counts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithStats {
    #[serde(flatten)]
    pub event: Event,
    pub template: Template,
    pub guest_count: i64,
    pub media_count: i64,
}

impl From<EventListRow> for EventWithStats {
    fn from(row: EventListRow) -> Self {
        let template = Template {
            id: row.event.template_id,
            name: row.t_name,
            slug: row.t_slug,
            category: row.t_category,
            preview_image: row.t_preview_image,
            is_active: row.t_is_active,
            created_at: row.t_created_at,
            updated_at: row.t_updated_at,
        };
        EventWithStats {
            event: row.event,
            template,
            guest_count: row.guest_count,
            media_count: row.media_count,
        }
    }
}

/// Full event detail: the event, its template, and child collections.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub template: Template,
    pub guests: Vec<Guest>,
    pub media: Vec<Media>,
}

/// Compact event reference embedded in guest/media listings.
#[derive(Debug, Clone, Serialize)]
pub struct EventRef {
    pub id: DbId,
    pub title: String,
}

/// DTO for creating an event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub template_id: DbId,
    pub title: String,
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub bride_phone: String,
    pub groom_phone: String,
    pub event_date: Timestamp,
    pub location: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub slug: String,
    pub subdomain: Option<String>,
    pub is_published: Option<bool>,
}

/// DTO for updating an event. All fields are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    pub template_id: Option<DbId>,
    pub title: Option<String>,
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub bride_phone: Option<String>,
    pub groom_phone: Option<String>,
    pub event_date: Option<Timestamp>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub slug: Option<String>,
    pub subdomain: Option<String>,
    pub is_published: Option<bool>,
}
