use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveProjectError {
    #[error("User not found")]
    OwnerNotFound,

    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<(), RemoveProjectError>;
}
