//! Handlers for wedding events.
//!
//! Events are the tenancy root: every row carries the owning
//! `studio_id`, and all lookups filter on the session's studio so a
//! foreign event id behaves exactly like a nonexistent one (404).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use vowdesk_core::error::CoreError;
use vowdesk_core::types::DbId;
use vowdesk_db::models::event::{CreateEvent, Event, EventDetail, EventWithStats, UpdateEvent};
use vowdesk_db::repositories::{EventRepo, GuestRepo, MediaRepo, TemplateRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::StudioSession;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub events: Vec<EventWithStats>,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub event: Event,
}

#[derive(Debug, Serialize)]
pub struct EventDetailResponse {
    pub event: EventDetail,
}

/// GET /api/studio/events
///
/// Lists the studio's events with template details and guest/media
/// counts, newest first.
pub async fn list_events(
    session: StudioSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = EventRepo::list_by_studio(&state.pool, session.studio_id).await?;
    let events: Vec<EventWithStats> = rows.into_iter().map(EventWithStats::from).collect();

    Ok(Json(EventsResponse { events }))
}

/// POST /api/studio/events
///
/// The referenced template must exist and be active.
pub async fn create_event(
    session: StudioSession,
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() || input.slug.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Event title and slug are required".to_string(),
        )));
    }

    ensure_template_active(&state, input.template_id).await?;

    let event = EventRepo::create(&state.pool, session.studio_id, &input).await?;

    tracing::info!(event_id = %event.id, studio_id = %session.studio_id, "Event created");

    Ok((StatusCode::CREATED, Json(EventResponse { event })))
}

/// GET /api/studio/events/{id}
///
/// Full detail: the event, its template, and its guest and media lists.
pub async fn get_event(
    session: StudioSession,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_in_studio(&state.pool, session.studio_id, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    let template = TemplateRepo::find_by_id(&state.pool, event.template_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: event.template_id,
        }))?;
    let guests = GuestRepo::list_by_event(&state.pool, event.id).await?;
    let media = MediaRepo::list_rows_by_event(&state.pool, event.id).await?;

    Ok(Json(EventDetailResponse {
        event: EventDetail {
            event,
            template,
            guests,
            media,
        },
    }))
}

/// PATCH /api/studio/events/{id}
///
/// Only fields present in the body are changed. A new template id must
/// be active.
pub async fn update_event(
    session: StudioSession,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    if let Some(template_id) = input.template_id {
        ensure_template_active(&state, template_id).await?;
    }

    let event = EventRepo::update(&state.pool, session.studio_id, event_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    tracing::info!(event_id = %event.id, studio_id = %session.studio_id, "Event updated");

    Ok(Json(EventResponse { event }))
}

/// DELETE /api/studio/events/{id}
///
/// Guests and media are removed by cascade.
pub async fn delete_event(
    session: StudioSession,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = EventRepo::delete(&state.pool, session.studio_id, event_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }));
    }

    tracing::info!(event_id = %event_id, studio_id = %session.studio_id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_template_active(state: &AppState, template_id: DbId) -> AppResult<()> {
    if !TemplateRepo::is_active(&state.pool, template_id).await? {
        return Err(AppError::BadRequest(
            "Template not found or inactive".to_string(),
        ));
    }
    Ok(())
}
