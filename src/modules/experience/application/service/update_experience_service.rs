use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::ExperienceData;
use crate::modules::experience::application::ports::incoming::use_cases::{
    UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

pub struct UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        experience_id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceData, UpdateExperienceError> {
        data.validate()?;

        self.repository
            .update(experience_id, data.clone())
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => UpdateExperienceError::NotFound,
                other => UpdateExperienceError::RepositoryError(other.to_string()),
            })?;

        Ok(data)
    }
}
