//! Media asset entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vowdesk_core::types::{DbId, Timestamp};

use crate::models::event::EventRef;

/// Kind of media asset attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "media_type")]
pub enum MediaType {
    #[sqlx(rename = "IMAGE")]
    Image,
    #[sqlx(rename = "VIDEO")]
    Video,
}

/// Full media row from the `media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: DbId,
    pub event_id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub created_at: Timestamp,
}

/// Internal row shape for media listings (media plus the owning event's
/// title).
#[derive(Debug, FromRow)]
pub struct MediaListRow {
    #[sqlx(flatten)]
    pub media: Media,
    pub event_title: String,
}

/// Media plus a compact reference to its event.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaWithEvent {
    #[serde(flatten)]
    pub media: Media,
    pub event: EventRef,
}

impl From<MediaListRow> for MediaWithEvent {
    fn from(row: MediaListRow) -> Self {
        let event = EventRef {
            id: row.media.event_id,
            title: row.event_title,
        };
        MediaWithEvent {
            media: row.media,
            event,
        }
    }
}

/// DTO for creating a media asset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedia {
    pub event_id: DbId,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
}

/// DTO for updating a media asset. All fields are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMedia {
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    pub url: Option<String>,
}
