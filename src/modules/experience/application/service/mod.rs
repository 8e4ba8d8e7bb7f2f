mod create_experience_service;
mod get_experiences_service;
mod get_single_experience_service;
mod remove_experience_service;
mod update_experience_service;

pub use create_experience_service::CreateExperienceService;
pub use get_experiences_service::GetExperiencesService;
pub use get_single_experience_service::GetSingleExperienceService;
pub use remove_experience_service::RemoveExperienceService;
pub use update_experience_service::UpdateExperienceService;
