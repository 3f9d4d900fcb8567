//! Handlers for account and studio settings.
//!
//! One endpoint serves both the caller's own profile and the studio
//! record. Changing the password requires proving knowledge of the
//! current one; studio fields are writable by admins only.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use vowdesk_core::error::CoreError;
use vowdesk_core::roles::{Role, TeamRole};
use vowdesk_core::types::DbId;
use vowdesk_db::models::studio::{Studio, UpdateStudioSettings};
use vowdesk_db::models::user::UpdateAccount;
use vowdesk_db::repositories::{StudioRepo, UserRepo};

use crate::auth::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::StudioSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub phone: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
    pub studio_name: Option<String>,
    pub studio_email: Option<String>,
    pub studio_phone: Option<String>,
    pub studio_logo_url: Option<String>,
    pub studio_primary_color: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUser {
    pub id: DbId,
    pub phone: String,
    pub role: Role,
    pub team_role: TeamRole,
}

#[derive(Debug, Serialize)]
pub struct AccountData {
    pub user: AccountUser,
    pub studio: Studio,
}

/// GET /api/studio/settings/account
pub async fn get_account(
    session: StudioSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    account_data(&state, session.user_id).await.map(Json)
}

/// PATCH /api/studio/settings/account
///
/// Applies profile changes (phone, password) for the caller and studio
/// changes for admins. Password changes verify the current password
/// first. Studio fields from a STAFF session are rejected with 403
/// before anything is written.
pub async fn update_account(
    session: StudioSession,
    State(state): State<AppState>,
    Json(input): Json<UpdateAccountRequest>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(AppError::unauthorized)?;

    let wants_studio_update = input.studio_name.is_some()
        || input.studio_email.is_some()
        || input.studio_phone.is_some()
        || input.studio_logo_url.is_some()
        || input.studio_primary_color.is_some();
    if wants_studio_update && user.role != Role::Admin {
        return Err(AppError::Core(CoreError::Forbidden(
            "Admin access required".to_string(),
        )));
    }

    let password_hash = match &input.new_password {
        Some(new_password) => {
            if new_password.len() < MIN_PASSWORD_LENGTH {
                return Err(AppError::BadRequest(
                    "Invalid account settings payload".to_string(),
                ));
            }
            let current = input.current_password.as_deref().ok_or_else(|| {
                AppError::BadRequest(
                    "Current password is required to set a new password".to_string(),
                )
            })?;
            let valid = verify_password(current, &user.password_hash).map_err(|e| {
                AppError::InternalError(format!("Password verification failed: {e}"))
            })?;
            if !valid {
                return Err(AppError::BadRequest(
                    "Current password is incorrect".to_string(),
                ));
            }
            Some(
                hash_password(new_password)
                    .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?,
            )
        }
        None => None,
    };

    let phone = input
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != user.phone)
        .map(str::to_string);

    if phone.is_some() || password_hash.is_some() {
        UserRepo::update_account(
            &state.pool,
            session.user_id,
            &UpdateAccount {
                phone,
                password_hash,
            },
        )
        .await?
        .ok_or_else(AppError::unauthorized)?;
    }

    if wants_studio_update {
        StudioRepo::update_settings(
            &state.pool,
            session.studio_id,
            &UpdateStudioSettings {
                name: input.studio_name,
                email: input.studio_email,
                phone: input.studio_phone,
                logo_url: input.studio_logo_url,
                primary_color: input.studio_primary_color,
            },
        )
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Studio",
            id: session.studio_id,
        }))?;
    }

    tracing::info!(user_id = %session.user_id, "Account settings updated");

    account_data(&state, session.user_id).await.map(Json)
}

async fn account_data(state: &AppState, user_id: DbId) -> AppResult<AccountData> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(AppError::unauthorized)?;
    let studio = StudioRepo::find_by_id(&state.pool, user.studio_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Studio",
            id: user.studio_id,
        }))?;

    Ok(AccountData {
        user: AccountUser {
            id: user.id,
            phone: user.phone,
            role: user.role,
            team_role: user.team_role,
        },
        studio,
    })
}
