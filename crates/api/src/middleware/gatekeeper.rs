//! Edge gatekeeper for the studio area.
//!
//! Sits in front of `/api/studio/*` and `/studio/*` and rejects requests
//! that do not carry a session cookie at all. It deliberately does NOT
//! verify the token; signature and expiry checks belong to the session
//! extractor so they run with the full application state. A forged
//! cookie passes this layer and is rejected by the handler with 401.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::auth::cookie::SESSION_COOKIE;

/// Reject cookie-less requests early: API paths get a 401 JSON body,
/// page paths are redirected to the login page.
pub async fn require_session_cookie(jar: CookieJar, request: Request, next: Next) -> Response {
    if jar.get(SESSION_COOKIE).is_none() {
        if request.uri().path().starts_with("/api/") {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized", "code": "UNAUTHORIZED" })),
            )
                .into_response();
        }
        return Redirect::to("/").into_response();
    }
    next.run(request).await
}
