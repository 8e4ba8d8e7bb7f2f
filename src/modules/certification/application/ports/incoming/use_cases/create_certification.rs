use async_trait::async_trait;

use crate::modules::certification::application::domain::entities::{
    Certification, CertificationData,
};
use crate::shared::validation::MissingFields;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCertificationError {
    #[error(transparent)]
    Validation(#[from] MissingFields),

    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCertificationUseCase: Send + Sync {
    /// Stores the certification under the singleton owner.
    async fn execute(
        &self,
        data: CertificationData,
    ) -> Result<Certification, CreateCertificationError>;
}
