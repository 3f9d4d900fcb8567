//! Handlers for invitation templates.
//!
//! Templates are a global catalog shared by every studio: any
//! authenticated user can read them, only admins can write. Deleting a
//! template still referenced by events surfaces as a 409 conflict.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use vowdesk_core::error::CoreError;
use vowdesk_core::types::DbId;
use vowdesk_db::models::template::{CreateTemplate, Template, TemplateWithUsage, UpdateTemplate};
use vowdesk_db::repositories::TemplateRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::StudioSession;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateListParams {
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<TemplateWithUsage>,
}

#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub template: Template,
}

/// GET /api/studio/templates?includeInactive=true
///
/// Lists templates with their event usage counts. Inactive templates are
/// hidden unless `includeInactive=true` is passed.
pub async fn list_templates(
    _session: StudioSession,
    State(state): State<AppState>,
    Query(params): Query<TemplateListParams>,
) -> AppResult<impl IntoResponse> {
    let templates = TemplateRepo::list(&state.pool, params.include_inactive).await?;

    Ok(Json(TemplatesResponse { templates }))
}

/// POST /api/studio/templates
///
/// Admin only. Duplicate slugs are rejected with 409.
pub async fn create_template(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTemplate>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() || input.slug.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Template name and slug are required".to_string(),
        )));
    }

    let template = TemplateRepo::create(&state.pool, &input).await?;

    tracing::info!(template_id = %template.id, user_id = %admin.user_id, "Template created");

    Ok((StatusCode::CREATED, Json(TemplateResponse { template })))
}

/// GET /api/studio/templates/{id}
pub async fn get_template(
    _session: StudioSession,
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::find_by_id(&state.pool, template_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: template_id,
        }))?;

    Ok(Json(TemplateResponse { template }))
}

/// PATCH /api/studio/templates/{id}
///
/// Admin only. Only fields present in the body are changed.
pub async fn update_template(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
    Json(input): Json<UpdateTemplate>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::update(&state.pool, template_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: template_id,
        }))?;

    tracing::info!(template_id = %template.id, user_id = %admin.user_id, "Template updated");

    Ok(Json(TemplateResponse { template }))
}

/// DELETE /api/studio/templates/{id}
///
/// Admin only. Events referencing the template block deletion (409 via
/// the foreign-key constraint).
pub async fn delete_template(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TemplateRepo::delete(&state.pool, template_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: template_id,
        }));
    }

    tracing::info!(template_id = %template_id, user_id = %admin.user_id, "Template deleted");

    Ok(StatusCode::NO_CONTENT)
}
