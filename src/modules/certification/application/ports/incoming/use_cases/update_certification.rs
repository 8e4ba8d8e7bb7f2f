use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::application::domain::entities::CertificationData;
use crate::shared::validation::MissingFields;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCertificationError {
    #[error(transparent)]
    Validation(#[from] MissingFields),

    #[error("Certification not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCertificationUseCase: Send + Sync {
    /// Full replacement. Returns the accepted input, not a re-read.
    async fn execute(
        &self,
        certification_id: Uuid,
        data: CertificationData,
    ) -> Result<CertificationData, UpdateCertificationError>;
}
