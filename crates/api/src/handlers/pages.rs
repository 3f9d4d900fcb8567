//! Minimal page shells.
//!
//! The dashboard is a client-rendered app served from a static shell;
//! these handlers only give the gatekeeper something to protect and the
//! login redirect somewhere to land.

use axum::response::Html;

/// GET /
///
/// Public login page shell.
pub async fn login_page() -> Html<&'static str> {
    Html(
        "<!doctype html><html><head><title>Vowdesk</title></head>\
         <body><div id=\"app\" data-page=\"login\"></div></body></html>",
    )
}

/// GET /studio and /studio/{*page}
///
/// Dashboard shell. Unauthenticated navigation never reaches this
/// handler; the gatekeeper redirects it to `/`.
pub async fn studio_page() -> Html<&'static str> {
    Html(
        "<!doctype html><html><head><title>Vowdesk Studio</title></head>\
         <body><div id=\"app\" data-page=\"studio\"></div></body></html>",
    )
}
