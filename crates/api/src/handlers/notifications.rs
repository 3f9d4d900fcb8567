//! Handlers for notification preferences.
//!
//! Preferences never touch the database: they live as JSON inside an
//! HttpOnly cookie on the operator's browser. A missing or unreadable
//! cookie yields the defaults, and unknown or missing fields fall back
//! field by field.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

use crate::auth::cookie::NOTIFICATIONS_COOKIE;
use crate::error::AppResult;
use crate::middleware::auth::StudioSession;
use crate::state::AppState;

const PREFS_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPreferences {
    pub rsvp_updates: bool,
    pub check_in_alerts: bool,
    pub draft_reminders: bool,
    pub media_uploads: bool,
    pub weekly_summary: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            rsvp_updates: true,
            check_in_alerts: true,
            draft_reminders: true,
            media_uploads: true,
            weekly_summary: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub preferences: NotificationPreferences,
}

/// GET /api/studio/settings/notifications
pub async fn get_preferences(
    _session: StudioSession,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let preferences = read_preferences(&jar);
    Ok(Json(PreferencesResponse { preferences }))
}

/// PATCH /api/studio/settings/notifications
///
/// Stores the full preference set back into the cookie with a one-year
/// lifetime.
pub async fn update_preferences(
    _session: StudioSession,
    State(state): State<AppState>,
    jar: CookieJar,
    Json(preferences): Json<NotificationPreferences>,
) -> AppResult<impl IntoResponse> {
    let value = serde_json::to_string(&preferences)
        .map_err(|e| crate::error::AppError::InternalError(format!("Serialization failed: {e}")))?;

    let cookie = Cookie::build((NOTIFICATIONS_COOKIE, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(state.config.production)
        .max_age(time::Duration::seconds(PREFS_MAX_AGE_SECS))
        .build();

    Ok((jar.add(cookie), Json(PreferencesResponse { preferences })))
}

fn read_preferences(jar: &CookieJar) -> NotificationPreferences {
    jar.get(NOTIFICATIONS_COOKIE)
        .and_then(|c| serde_json::from_str(c.value()).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.rsvp_updates);
        assert!(prefs.check_in_alerts);
        assert!(prefs.draft_reminders);
        assert!(prefs.media_uploads);
        assert!(!prefs.weekly_summary);
    }

    #[test]
    fn test_partial_cookie_falls_back_per_field() {
        let prefs: NotificationPreferences =
            serde_json::from_str(r#"{"weeklySummary":true}"#).unwrap();
        assert!(prefs.rsvp_updates, "missing fields keep their defaults");
        assert!(prefs.weekly_summary);
    }

    #[test]
    fn test_garbage_cookie_yields_defaults() {
        let jar = CookieJar::new().add(Cookie::new(NOTIFICATIONS_COOKIE, "not-json"));
        assert_eq!(read_preferences(&jar), NotificationPreferences::default());
    }
}
