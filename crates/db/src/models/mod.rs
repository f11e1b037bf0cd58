//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches, where
//!   the resource supports updates

pub mod image;
pub mod post;
pub mod project;
pub mod settings;
pub mod skill;
pub mod submission;
pub mod testimonial;
