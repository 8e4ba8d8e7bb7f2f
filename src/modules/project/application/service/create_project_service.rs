use async_trait::async_trait;

use crate::auth::application::helpers::{OwnerResolver, ResolveOwnerError};
use crate::modules::project::application::domain::entities::{Project, ProjectData};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
    owner_resolver: OwnerResolver,
}

impl<R> CreateProjectService<R>
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
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: ProjectData) -> Result<Project, CreateProjectError> {
        data.validate()?;

        let owner = self.owner_resolver.resolve().await.map_err(|e| match e {
            ResolveOwnerError::NotFound => CreateProjectError::OwnerNotFound,
            ResolveOwnerError::RepositoryError(msg) => CreateProjectError::RepositoryError(msg),
        })?;

        self.repository
            .create_for_owner(owner, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::OwnerNotFound => CreateProjectError::OwnerNotFound,
                other => CreateProjectError::RepositoryError(other.to_string()),
            })
    }
}
