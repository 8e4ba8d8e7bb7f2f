use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::ExperienceData;
use crate::shared::validation::MissingFields;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateExperienceError {
    #[error(transparent)]
    Validation(#[from] MissingFields),

    #[error("Experience not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    /// Full replacement. Returns the accepted input, not a re-read.
    async fn execute(
        &self,
        experience_id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceData, UpdateExperienceError>;
}
