use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveExperienceError {
    #[error("User not found")]
    OwnerNotFound,

    #[error("Experience not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveExperienceUseCase: Send + Sync {
    async fn execute(&self, experience_id: Uuid) -> Result<(), RemoveExperienceError>;
}
