//! Role-based authorization gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vowdesk_core::error::CoreError;
use vowdesk_core::roles::Role;

use crate::error::AppError;
use crate::middleware::auth::StudioSession;
use crate::state::AppState;

/// Extractor that requires an authenticated session with the ADMIN role.
///
/// An unauthenticated request is rejected with 401 by the inner
/// [`StudioSession`] extraction; an authenticated non-admin gets 403.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub StudioSession);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = StudioSession::from_request_parts(parts, state).await?;
        if session.role != Role::Admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin access required".to_string(),
            )));
        }
        Ok(RequireAdmin(session))
    }
}
