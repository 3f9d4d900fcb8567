//! HTTP request handlers, grouped by resource.

pub mod account;
pub mod auth;
pub mod events;
pub mod guests;
pub mod media;
pub mod notifications;
pub mod pages;
pub mod team;
pub mod templates;
