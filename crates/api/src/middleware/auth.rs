//! Session resolution from the request cookie.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use vowdesk_core::roles::Role;
use vowdesk_core::types::DbId;

use crate::auth::cookie::SESSION_COOKIE;
use crate::auth::jwt;
use crate::error::AppError;
use crate::state::AppState;

/// The resolved session of an authenticated studio user.
///
/// Extracting this verifies the session cookie's token signature and
/// expiry. Every failure mode (missing cookie, bad signature, expired
/// token, malformed claims) maps to the same 401 response so callers
/// cannot distinguish between them.
#[derive(Debug, Clone)]
pub struct StudioSession {
    pub user_id: DbId,
    pub studio_id: DbId,
    pub role: Role,
    pub phone: String,
}

impl FromRequestParts<AppState> for StudioSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_owned())
            .ok_or_else(AppError::unauthorized)?;

        let claims = jwt::verify_session_token(&token, &state.config.jwt)
            .map_err(|_| AppError::unauthorized())?;

        Ok(StudioSession {
            user_id: claims.sub,
            studio_id: claims.studio_id,
            role: claims.role,
            phone: claims.phone,
        })
    }
}
