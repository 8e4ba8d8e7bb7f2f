use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectData;
use crate::shared::validation::MissingFields;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error(transparent)]
    Validation(#[from] MissingFields),

    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    /// Full replacement. Returns the accepted input, not a re-read.
    async fn execute(
        &self,
        project_id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectData, UpdateProjectError>;
}
