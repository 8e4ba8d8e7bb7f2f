use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveCertificationError {
    #[error("User not found")]
    OwnerNotFound,

    #[error("Certification not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveCertificationUseCase: Send + Sync {
    async fn execute(&self, certification_id: Uuid) -> Result<(), RemoveCertificationError>;
}
