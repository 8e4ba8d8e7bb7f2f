use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::application::domain::entities::Certification;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleCertificationError {
    #[error("Certification not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSingleCertificationUseCase: Send + Sync {
    async fn execute(
        &self,
        certification_id: Uuid,
    ) -> Result<Certification, GetSingleCertificationError>;
}
