//! Login, session resolution, and logout.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use serde_json::json;
use vowdesk_core::roles::Role;
use vowdesk_core::types::DbId;
use vowdesk_db::repositories::{StudioRepo, UserRepo};

use crate::auth::cookie::{build_session_cookie, clear_session_cookie};
use crate::auth::jwt::issue_session_token;
use crate::auth::password::{verify_password, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::StudioSession;
use crate::state::AppState;

const MIN_PHONE_LENGTH: usize = 3;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// The user half of a session payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: DbId,
    pub phone: String,
    pub role: Role,
    pub studio_id: DbId,
}

/// Body returned by both login and session resolution.
#[derive(Debug, Serialize)]
pub struct SessionData {
    pub user: SessionUser,
    pub studio: vowdesk_db::models::studio::StudioSummary,
}

/// POST /api/auth/login
///
/// Verifies phone + password and sets the session cookie. Unknown phone
/// and wrong password produce byte-identical 401 responses so the login
/// endpoint cannot be used to enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    if input.phone.trim().len() < MIN_PHONE_LENGTH || input.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest("Invalid login payload".to_string()));
    }

    let user = UserRepo::find_by_phone(&state.pool, &input.phone)
        .await?
        .ok_or_else(invalid_credentials)?;

    let verified = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified {
        return Err(invalid_credentials());
    }

    let studio = StudioRepo::find_summary(&state.pool, user.studio_id)
        .await?
        .ok_or_else(invalid_credentials)?;

    let token = issue_session_token(
        user.id,
        user.studio_id,
        user.role,
        &user.phone,
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token issuance failed: {e}")))?;

    let cookie = build_session_cookie(
        token,
        state.config.jwt.session_ttl_secs as u64,
        state.config.production,
    );

    tracing::info!(user_id = %user.id, studio_id = %user.studio_id, "User logged in");

    let body = SessionData {
        user: SessionUser {
            id: user.id,
            phone: user.phone,
            role: user.role,
            studio_id: user.studio_id,
        },
        studio,
    };
    Ok((jar.add(cookie), Json(body)))
}

/// GET /api/auth/session
///
/// Resolves the current session from the cookie and re-reads the user
/// so a deleted account is logged out on its next request.
pub async fn session(
    session: StudioSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(AppError::unauthorized)?;

    let studio = StudioRepo::find_summary(&state.pool, user.studio_id)
        .await?
        .ok_or_else(AppError::unauthorized)?;

    let body = SessionData {
        user: SessionUser {
            id: user.id,
            phone: user.phone,
            role: user.role,
            studio_id: user.studio_id,
        },
        studio,
    };
    Ok(Json(body))
}

/// POST /api/auth/logout
///
/// Clears the session cookie. There is no server-side revocation list;
/// an already-issued token stays valid until it expires.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let cookie = clear_session_cookie(state.config.production);
    (jar.add(cookie), Json(json!({ "ok": true })))
}

fn invalid_credentials() -> AppError {
    AppError::Core(vowdesk_core::error::CoreError::Unauthorized(
        "Invalid credentials".to_string(),
    ))
}
