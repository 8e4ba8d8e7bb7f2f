use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::helpers::{OwnerResolver, ResolveOwnerError};
use crate::modules::project::application::ports::incoming::use_cases::{
    RemoveProjectError, RemoveProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct RemoveProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
    owner_resolver: OwnerResolver,
}

impl<R> RemoveProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R, owner_resolver: OwnerResolver) -> Self {
        Self {
            repository,
            owner_resolver,
        }
    }
}

#[async_trait]
impl<R> RemoveProjectUseCase for RemoveProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<(), RemoveProjectError> {
        let owner = self.owner_resolver.resolve().await.map_err(|e| match e {
            ResolveOwnerError::NotFound => RemoveProjectError::OwnerNotFound,
            ResolveOwnerError::RepositoryError(msg) => RemoveProjectError::RepositoryError(msg),
        })?;

        self.repository
            .delete_for_owner(owner, project_id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => RemoveProjectError::NotFound,
                ProjectRepositoryError::OwnerNotFound => RemoveProjectError::OwnerNotFound,
                other => RemoveProjectError::RepositoryError(other.to_string()),
            })
    }
}
