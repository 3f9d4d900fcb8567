//! Handlers for event media (gallery images and videos).
//!
//! Only URL metadata is stored; upload and storage live elsewhere.
//! Tenancy follows the guests pattern: resolved through the owning event.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use vowdesk_core::error::CoreError;
use vowdesk_core::types::DbId;
use vowdesk_db::models::media::{CreateMedia, MediaWithEvent, UpdateMedia};
use vowdesk_db::repositories::{EventRepo, MediaRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::StudioSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaListParams {
    pub event_id: Option<DbId>,
    pub scope: Option<String>,
}

// The `media` key carries both list and single-asset payloads.
#[derive(Debug, Serialize)]
pub struct MediaResponse<T> {
    pub media: T,
}

/// GET /api/studio/media?eventId=…  |  ?scope=studio
///
/// Studio scope is capped at the latest 200 assets.
pub async fn list_media(
    session: StudioSession,
    State(state): State<AppState>,
    Query(params): Query<MediaListParams>,
) -> AppResult<Response> {
    if let Some(event_id) = params.event_id {
        ensure_event_in_studio(&state, session.studio_id, event_id).await?;
        let rows = MediaRepo::list_by_event(&state.pool, event_id).await?;
        let media: Vec<MediaWithEvent> = rows.into_iter().map(MediaWithEvent::from).collect();
        return Ok(Json(MediaResponse { media }).into_response());
    }

    if params.scope.as_deref() == Some("studio") {
        let rows = MediaRepo::list_by_studio(&state.pool, session.studio_id).await?;
        let media: Vec<MediaWithEvent> = rows.into_iter().map(MediaWithEvent::from).collect();
        return Ok(Json(MediaResponse { media }).into_response());
    }

    Err(AppError::BadRequest(
        "eventId query param is required, or set scope=studio".to_string(),
    ))
}

/// POST /api/studio/media
pub async fn create_media(
    session: StudioSession,
    State(state): State<AppState>,
    Json(input): Json<CreateMedia>,
) -> AppResult<impl IntoResponse> {
    ensure_event_in_studio(&state, session.studio_id, input.event_id).await?;

    if input.url.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Media url is required".to_string(),
        )));
    }

    let media = MediaRepo::create(&state.pool, &input).await?;

    tracing::info!(media_id = %media.id, event_id = %media.event_id, "Media created");

    Ok((StatusCode::CREATED, Json(MediaResponse { media })))
}

/// GET /api/studio/media/{id}
pub async fn get_media(
    session: StudioSession,
    State(state): State<AppState>,
    Path(media_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let media = MediaRepo::find_in_studio(&state.pool, session.studio_id, media_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id: media_id,
        }))?;

    Ok(Json(MediaResponse { media }))
}

/// PATCH /api/studio/media/{id}
pub async fn update_media(
    session: StudioSession,
    State(state): State<AppState>,
    Path(media_id): Path<DbId>,
    Json(input): Json<UpdateMedia>,
) -> AppResult<impl IntoResponse> {
    MediaRepo::find_in_studio(&state.pool, session.studio_id, media_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id: media_id,
        }))?;

    let media = MediaRepo::update(&state.pool, media_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id: media_id,
        }))?;

    Ok(Json(MediaResponse { media }))
}

/// DELETE /api/studio/media/{id}
pub async fn delete_media(
    session: StudioSession,
    State(state): State<AppState>,
    Path(media_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    MediaRepo::find_in_studio(&state.pool, session.studio_id, media_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Media",
            id: media_id,
        }))?;

    MediaRepo::delete(&state.pool, media_id).await?;

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
