use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectData};
use crate::shared::validation::MissingFields;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error(transparent)]
    Validation(#[from] MissingFields),

    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    /// Stores the project under the singleton owner.
    async fn execute(&self, data: ProjectData) -> Result<Project, CreateProjectError>;
}
