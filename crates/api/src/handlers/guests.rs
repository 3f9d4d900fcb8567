//! Handlers for guest lists and check-in.
//!
//! Guests have no `studio_id` of their own; tenancy is resolved through
//! the owning event. Handlers therefore verify the event before writes
//! and join through events on reads.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use vowdesk_core::error::CoreError;
use vowdesk_core::types::DbId;
use vowdesk_db::models::guest::{BulkGuestRow, CreateGuest, Guest, GuestWithEvent, UpdateGuest};
use vowdesk_db::repositories::{EventRepo, GuestRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::StudioSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestListParams {
    pub event_id: Option<DbId>,
    pub scope: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GuestsResponse<T> {
    pub guests: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct GuestResponse {
    pub guest: Guest,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateGuests {
    pub event_id: DbId,
    pub guests: Vec<BulkGuestRow>,
}

/// GET /api/studio/guests?eventId=…  |  ?scope=studio
///
/// With `eventId`, lists that event's guests (404 for a foreign event).
/// With `scope=studio`, lists the studio's latest 100 guests with their
/// event reference. One of the two is required.
pub async fn list_guests(
    session: StudioSession,
    State(state): State<AppState>,
    Query(params): Query<GuestListParams>,
) -> AppResult<Response> {
    if let Some(event_id) = params.event_id {
        ensure_event_in_studio(&state, session.studio_id, event_id).await?;
        let guests = GuestRepo::list_by_event(&state.pool, event_id).await?;
        return Ok(Json(GuestsResponse { guests }).into_response());
    }

    if params.scope.as_deref() == Some("studio") {
        let rows = GuestRepo::list_by_studio(&state.pool, session.studio_id).await?;
        let guests: Vec<GuestWithEvent> = rows.into_iter().map(GuestWithEvent::from).collect();
        return Ok(Json(GuestsResponse { guests }).into_response());
    }

    Err(AppError::BadRequest(
        "eventId query param is required, or set scope=studio".to_string(),
    ))
}

/// POST /api/studio/guests
pub async fn create_guest(
    session: StudioSession,
    State(state): State<AppState>,
    Json(input): Json<CreateGuest>,
) -> AppResult<impl IntoResponse> {
    ensure_event_in_studio(&state, session.studio_id, input.event_id).await?;

    if input.name.trim().is_empty() || input.invitation_code.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Guest name and invitation code are required".to_string(),
        )));
    }

    let guest = GuestRepo::create(&state.pool, &input).await?;

    tracing::info!(guest_id = %guest.id, event_id = %guest.event_id, "Guest created");

    Ok((StatusCode::CREATED, Json(GuestResponse { guest })))
}

/// POST /api/studio/guests/bulk
///
/// Creates a batch of guests for one event in a single transaction. A
/// duplicate invitation code anywhere in the batch rolls back the whole
/// insert and returns 409; no partial state survives.
pub async fn create_guests_bulk(
    session: StudioSession,
    State(state): State<AppState>,
    Json(input): Json<BulkCreateGuests>,
) -> AppResult<impl IntoResponse> {
    ensure_event_in_studio(&state, session.studio_id, input.event_id).await?;

    if input.guests.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Guest list must not be empty".to_string(),
        )));
    }
    if input
        .guests
        .iter()
        .any(|g| g.name.trim().is_empty() || g.invitation_code.trim().is_empty())
    {
        return Err(AppError::Core(CoreError::Validation(
            "Every guest needs a name and an invitation code".to_string(),
        )));
    }

    let guests = GuestRepo::create_bulk(&state.pool, input.event_id, &input.guests).await?;

    tracing::info!(
        event_id = %input.event_id,
        count = guests.len(),
        "Guests bulk-created"
    );

    Ok((StatusCode::CREATED, Json(GuestsResponse { guests })))
}

/// GET /api/studio/guests/{id}
pub async fn get_guest(
    session: StudioSession,
    State(state): State<AppState>,
    Path(guest_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let guest = GuestRepo::find_in_studio(&state.pool, session.studio_id, guest_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id: guest_id,
        }))?;

    Ok(Json(GuestResponse { guest }))
}

/// PATCH /api/studio/guests/{id}
///
/// The check-in flag carries state with it: setting it true stamps
/// `checked_in_at` once and keeps the original stamp afterwards, setting
/// it false clears the stamp, omitting it leaves both untouched.
pub async fn update_guest(
    session: StudioSession,
    State(state): State<AppState>,
    Path(guest_id): Path<DbId>,
    Json(input): Json<UpdateGuest>,
) -> AppResult<impl IntoResponse> {
    let existing = GuestRepo::find_in_studio(&state.pool, session.studio_id, guest_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id: guest_id,
        }))?;

    let (checked_in, checked_in_at) = match input.checked_in {
        None => (existing.checked_in, existing.checked_in_at),
        Some(true) => (
            true,
            existing.checked_in_at.or_else(|| Some(chrono::Utc::now())),
        ),
        Some(false) => (false, None),
    };

    let guest = GuestRepo::update(
        &state.pool,
        guest_id,
        input.name.as_deref(),
        input.phone.as_deref(),
        input.email.as_deref(),
        input.category,
        input.invitation_code.as_deref(),
        checked_in,
        checked_in_at,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Guest",
        id: guest_id,
    }))?;

    Ok(Json(GuestResponse { guest }))
}

/// PATCH /api/studio/guests/{id}/check-in
///
/// Idempotent check-in for the door station: repeat calls keep the
/// timestamp of the first one.
pub async fn check_in_guest(
    session: StudioSession,
    State(state): State<AppState>,
    Path(guest_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Scope check first so a foreign guest id 404s instead of flipping.
    GuestRepo::find_in_studio(&state.pool, session.studio_id, guest_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id: guest_id,
        }))?;

    let guest = GuestRepo::check_in(&state.pool, guest_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id: guest_id,
        }))?;

    tracing::info!(guest_id = %guest.id, "Guest checked in");

    Ok(Json(GuestResponse { guest }))
}

/// DELETE /api/studio/guests/{id}
pub async fn delete_guest(
    session: StudioSession,
    State(state): State<AppState>,
    Path(guest_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    GuestRepo::find_in_studio(&state.pool, session.studio_id, guest_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id: guest_id,
        }))?;

    GuestRepo::delete(&state.pool, guest_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_event_in_studio(
    state: &AppState,
    studio_id: DbId,
    event_id: DbId,
) -> AppResult<()> {
    if !EventRepo::exists_in_studio(&state.pool, studio_id, event_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }));
    }
    Ok(())
}
