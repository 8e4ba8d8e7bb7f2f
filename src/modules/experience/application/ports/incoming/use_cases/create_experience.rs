use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::{Experience, ExperienceData};
use crate::shared::validation::MissingFields;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateExperienceError {
    #[error(transparent)]
    Validation(#[from] MissingFields),

    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    /// Stores the experience under the singleton owner.
    async fn execute(&self, data: ExperienceData) -> Result<Experience, CreateExperienceError>;
}
