use async_trait::async_trait;

use crate::auth::application::helpers::{OwnerResolver, ResolveOwnerError};
use crate::modules::experience::application::domain::entities::{Experience, ExperienceData};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

pub struct CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
    owner_resolver: OwnerResolver,
}

impl<R> CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R, owner_resolver: OwnerResolver) -> Self {
        Self {
            repository,
            owner_resolver,
        }
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, data: ExperienceData) -> Result<Experience, CreateExperienceError> {
        data.validate()?;

        let owner = self.owner_resolver.resolve().await.map_err(|e| match e {
            ResolveOwnerError::NotFound => CreateExperienceError::OwnerNotFound,
            ResolveOwnerError::RepositoryError(msg) => CreateExperienceError::RepositoryError(msg),
        })?;

        self.repository
            .create_for_owner(owner, data)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::OwnerNotFound => CreateExperienceError::OwnerNotFound,
                other => CreateExperienceError::RepositoryError(other.to_string()),
            })
    }
}
