//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod image_repo;
pub mod post_repo;
pub mod project_repo;
pub mod settings_repo;
pub mod skill_repo;
pub mod submission_repo;
pub mod testimonial_repo;

pub use image_repo::ImageRepo;
pub use post_repo::PostRepo;
pub use project_repo::ProjectRepo;
pub use settings_repo::SettingsRepo;
pub use skill_repo::SkillRepo;
pub use submission_repo::SubmissionRepo;
pub use testimonial_repo::TestimonialRepo;
