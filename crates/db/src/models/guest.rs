//! Guest entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vowdesk_core::types::{DbId, Timestamp};

use crate::models::event::EventRef;

/// Invitation-side of a guest (bride's list, groom's list, or general).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "guest_category")]
pub enum GuestCategory {
    #[sqlx(rename = "GENERAL")]
    General,
    #[sqlx(rename = "BRIDE_GUEST")]
    BrideGuest,
    #[sqlx(rename = "GROOM_GUEST")]
    GroomGuest,
}

/// Full guest row from the `guests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: DbId,
    pub event_id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category: GuestCategory,
    pub invitation_code: String,
    pub checked_in: bool,
    pub checked_in_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Internal row shape for the studio-wide guest listing (guest plus the
/// owning event's title).
#[derive(Debug, FromRow)]
pub struct GuestListRow {
    #[sqlx(flatten)]
    pub guest: Guest,
    pub event_title: String,
}

/// Guest plus a compact reference to its event.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestWithEvent {
    #[serde(flatten)]
    pub guest: Guest,
    pub event: EventRef,
}

impl From<GuestListRow> for GuestWithEvent {
    fn from(row: GuestListRow) -> Self {
        let event = EventRef {
            id: row.guest.event_id,
            title: row.event_title,
        };
        GuestWithEvent {
            guest: row.guest,
            event,
        }
    }
}

/// DTO for creating a single guest.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuest {
    pub event_id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category: Option<GuestCategory>,
    pub invitation_code: String,
}

/// One row of a bulk guest import. Category defaults to GENERAL.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkGuestRow {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub invitation_code: String,
}

/// DTO for updating a guest. All fields are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category: Option<GuestCategory>,
    pub invitation_code: Option<String>,
    pub checked_in: Option<bool>,
}
