//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Serialized field names are camelCase to match the public API wire
//! format (`studioId`, `checkedInAt`, ...).

pub mod event;
pub mod guest;
pub mod media;
pub mod studio;
pub mod template;
pub mod user;
