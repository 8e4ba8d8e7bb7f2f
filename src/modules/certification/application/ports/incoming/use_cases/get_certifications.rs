use async_trait::async_trait;

use crate::modules::certification::application::domain::entities::Certification;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCertificationsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCertificationsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Certification>, GetCertificationsError>;
}
