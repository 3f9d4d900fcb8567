//! Handlers for team management under `/api/studio/settings/team`.
//!
//! Any member can list the team; creating, updating, and removing
//! members is admin-only. Created members are always STAFF; `team_role`
//! is a descriptive label and grants nothing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use vowdesk_core::error::CoreError;
use vowdesk_core::roles::{Role, TeamRole};
use vowdesk_core::types::DbId;
use vowdesk_db::models::user::{CreateUser, TeamMember, UpdateTeamMember};
use vowdesk_db::repositories::UserRepo;

use crate::auth::password::{hash_password, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::StudioSession;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMemberRequest {
    pub phone: String,
    pub password: String,
    pub team_role: TeamRole,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberRequest {
    pub phone: Option<String>,
    pub team_role: Option<TeamRole>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MembersResponse {
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member: TeamMember,
}

/// GET /api/studio/settings/team
pub async fn list_members(
    session: StudioSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let members = UserRepo::list_members(&state.pool, session.studio_id).await?;

    Ok(Json(MembersResponse { members }))
}

/// POST /api/studio/settings/team
///
/// Admin only. The phone number is globally unique (it is the login
/// identifier), so a taken phone is rejected before hashing.
pub async fn create_member(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTeamMemberRequest>,
) -> AppResult<impl IntoResponse> {
    if input.phone.trim().len() < 3 || input.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(
            "Invalid team member payload".to_string(),
        ));
    }

    if UserRepo::find_by_phone(&state.pool, input.phone.trim())
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Phone is already in use".to_string()));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            phone: input.phone.trim().to_string(),
            password_hash,
            role: Role::Staff,
            team_role: input.team_role,
            studio_id: admin.studio_id,
        },
    )
    .await?;

    tracing::info!(member_id = %user.id, studio_id = %admin.studio_id, "Team member created");

    let member = TeamMember {
        id: user.id,
        phone: user.phone,
        role: user.role,
        team_role: user.team_role,
        created_at: user.created_at,
        updated_at: user.updated_at,
    };
    Ok((StatusCode::CREATED, Json(MemberResponse { member })))
}

/// PATCH /api/studio/settings/team/{userId}
///
/// Admin only. A cross-studio user id is indistinguishable from a
/// missing one (404).
pub async fn update_member(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateTeamMemberRequest>,
) -> AppResult<impl IntoResponse> {
    let existing = UserRepo::find_member(&state.pool, admin.studio_id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Team member",
            id: user_id,
        }))?;

    if let Some(phone) = &input.phone {
        if phone.trim().len() < 3 {
            return Err(AppError::BadRequest(
                "Invalid team member payload".to_string(),
            ));
        }
        if phone.trim() != existing.phone {
            if let Some(taken) = UserRepo::find_by_phone(&state.pool, phone.trim()).await? {
                if taken.id != existing.id {
                    return Err(AppError::BadRequest("Phone is already in use".to_string()));
                }
            }
        }
    }

    let password_hash = match &input.password {
        Some(password) => {
            if password.len() < MIN_PASSWORD_LENGTH {
                return Err(AppError::BadRequest(
                    "Invalid team member payload".to_string(),
                ));
            }
            Some(
                hash_password(password)
                    .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?,
            )
        }
        None => None,
    };

    let member = UserRepo::update_member(
        &state.pool,
        admin.studio_id,
        user_id,
        &UpdateTeamMember {
            phone: input.phone.map(|p| p.trim().to_string()),
            team_role: input.team_role,
            password_hash,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Team member",
        id: user_id,
    }))?;

    tracing::info!(member_id = %member.id, studio_id = %admin.studio_id, "Team member updated");

    Ok(Json(MemberResponse { member }))
}

/// DELETE /api/studio/settings/team/{userId}
///
/// Admin only. Admins cannot remove themselves.
pub async fn delete_member(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if user_id == admin.user_id {
        return Err(AppError::BadRequest(
            "You cannot remove your own account".to_string(),
        ));
    }

    let deleted = UserRepo::delete_member(&state.pool, admin.studio_id, user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Team member",
            id: user_id,
        }));
    }

    tracing::info!(member_id = %user_id, studio_id = %admin.studio_id, "Team member removed");

    Ok(Json(json!({ "ok": true })))
}
