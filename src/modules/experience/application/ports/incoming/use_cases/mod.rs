mod create_experience;
mod get_experiences;
mod get_single_experience;
mod remove_experience;
mod update_experience;

pub use create_experience::{CreateExperienceError, CreateExperienceUseCase};
pub use get_experiences::{GetExperiencesError, GetExperiencesUseCase};
pub use get_single_experience::{GetSingleExperienceError, GetSingleExperienceUseCase};
pub use remove_experience::{RemoveExperienceError, RemoveExperienceUseCase};
pub use update_experience::{UpdateExperienceError, UpdateExperienceUseCase};
