pub mod experience_query;
pub mod experience_repository;

pub use experience_query::{ExperienceQuery, ExperienceQueryError};
pub use experience_repository::{ExperienceRepository, ExperienceRepositoryError};
