use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::helpers::{OwnerResolver, ResolveOwnerError};
use crate::modules::experience::application::ports::incoming::use_cases::{
    RemoveExperienceError, RemoveExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

pub struct RemoveExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
    owner_resolver: OwnerResolver,
}

impl<R> RemoveExperienceService<R>
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
impl<R> RemoveExperienceUseCase for RemoveExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, experience_id: Uuid) -> Result<(), RemoveExperienceError> {
        let owner = self.owner_resolver.resolve().await.map_err(|e| match e {
            ResolveOwnerError::NotFound => RemoveExperienceError::OwnerNotFound,
            ResolveOwnerError::RepositoryError(msg) => RemoveExperienceError::RepositoryError(msg),
        })?;

        self.repository
            .delete_for_owner(owner, experience_id)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => RemoveExperienceError::NotFound,
                ExperienceRepositoryError::OwnerNotFound => RemoveExperienceError::OwnerNotFound,
                other => RemoveExperienceError::RepositoryError(other.to_string()),
            })
    }
}
