//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Tenant isolation is
//! enforced here: every query that touches a studio-owned resource
//! filters on `studio_id` directly or joins through the owning event,
//! so cross-tenant rows are simply absent from results.

pub mod event_repo;
pub mod guest_repo;
pub mod media_repo;
pub mod studio_repo;
pub mod template_repo;
pub mod user_repo;

pub use event_repo::EventRepo;
pub use guest_repo::GuestRepo;
pub use media_repo::MediaRepo;
pub use studio_repo::StudioRepo;
pub use template_repo::TemplateRepo;
pub use user_repo::UserRepo;
