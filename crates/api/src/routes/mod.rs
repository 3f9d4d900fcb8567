//! Route definitions.
//!
//! Three trees share one [`AppState`]:
//!
//! - public routes (`/`, `/health`, `/api/auth/*`) -- the session
//!   resolver under `/api/auth/session` authenticates itself via the
//!   session extractor, so it does not sit behind the gatekeeper;
//! - `/api/studio/*` -- the JSON API, behind the gatekeeper;
//! - `/studio/*` -- dashboard page shells, behind the gatekeeper.

pub mod health;

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{account, auth, events, guests, media, notifications, pages, team, templates};
use crate::state::AppState;

/// Public routes: login page, authentication endpoints.
///
/// ```text
/// GET  /                     -> login page shell
/// POST /api/auth/login       -> login
/// GET  /api/auth/session     -> session
/// POST /api/auth/logout      -> logout
/// ```
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::login_page))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/session", get(auth::session))
        .route("/api/auth/logout", post(auth::logout))
}

/// The `/api/studio` route tree.
///
/// ```text
/// GET/POST          /templates                      (POST admin only)
/// GET/PATCH/DELETE  /templates/{id}                 (PATCH/DELETE admin only)
/// GET/POST          /events
/// GET/PATCH/DELETE  /events/{id}
/// GET/POST          /guests
/// POST              /guests/bulk
/// GET/PATCH/DELETE  /guests/{id}
/// PATCH             /guests/{id}/check-in
/// GET/POST          /media
/// GET/PATCH/DELETE  /media/{id}
/// GET/POST          /settings/team                  (POST admin only)
/// PATCH/DELETE      /settings/team/{user_id}        (admin only)
/// GET/PATCH         /settings/account
/// GET/PATCH         /settings/notifications
/// ```
pub fn studio_api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route(
            "/templates/{id}",
            get(templates::get_template)
                .patch(templates::update_template)
                .delete(templates::delete_template),
        )
        .route("/events", get(events::list_events).post(events::create_event))
        .route(
            "/events/{id}",
            get(events::get_event)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        .route("/guests", get(guests::list_guests).post(guests::create_guest))
        .route("/guests/bulk", post(guests::create_guests_bulk))
        .route(
            "/guests/{id}",
            get(guests::get_guest)
                .patch(guests::update_guest)
                .delete(guests::delete_guest),
        )
        .route("/guests/{id}/check-in", patch(guests::check_in_guest))
        .route("/media", get(media::list_media).post(media::create_media))
        .route(
            "/media/{id}",
            get(media::get_media)
                .patch(media::update_media)
                .delete(media::delete_media),
        )
        .route(
            "/settings/team",
            get(team::list_members).post(team::create_member),
        )
        .route(
            "/settings/team/{user_id}",
            patch(team::update_member).delete(team::delete_member),
        )
        .route(
            "/settings/account",
            get(account::get_account).patch(account::update_account),
        )
        .route(
            "/settings/notifications",
            get(notifications::get_preferences).patch(notifications::update_preferences),
        )
}

/// Dashboard page shells under `/studio`.
pub fn studio_page_routes() -> Router<AppState> {
    Router::new()
        .route("/studio", get(pages::studio_page))
        .route("/studio/{*page}", get(pages::studio_page))
}
