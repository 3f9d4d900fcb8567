//! Session cookie construction.
//!
//! The session token is carried exclusively in an HttpOnly cookie so it is
//! never readable from client-side script. The cookie is host-only (no
//! Domain attribute) and scoped to the whole site.

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "studio_session";

/// Name of the notification-preferences cookie.
pub const NOTIFICATIONS_COOKIE: &str = "studio_notifications";

/// Build the session cookie carrying a signed token.
///
/// HttpOnly and SameSite=Lax always; the Secure flag is only set in
/// production so local development over plain HTTP keeps working.
pub fn build_session_cookie(token: String, ttl_secs: u64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .max_age(time::Duration::seconds(ttl_secs as i64))
        .build()
}

/// Build an expired session cookie that instructs the browser to drop it.
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .max_age(time::Duration::ZERO)
        .build()
}
