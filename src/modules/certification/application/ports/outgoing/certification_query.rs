use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::application::domain::entities::Certification;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CertificationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait CertificationQuery: Send + Sync {
    /// Every certification, newest first.
    async fn list(&self) -> Result<Vec<Certification>, CertificationQueryError>;

    async fn get_by_id(
        &self,
        certification_id: Uuid,
    ) -> Result<Option<Certification>, CertificationQueryError>;

}
