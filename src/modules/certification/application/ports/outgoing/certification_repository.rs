use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::certification::application::domain::entities::{
    Certification, CertificationData,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CertificationRepositoryError {
    #[error("Certification not found")]
    NotFound,

    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    /// Inserts the certification and appends its id to the owner's list in one
    /// transaction.
    async fn create_for_owner(
        &self,
        owner: UserId,
        data: CertificationData,
    ) -> Result<Certification, CertificationRepositoryError>;

    /// Replaces the domain fields. Owner lists are left alone.
    async fn update(
        &self,
        certification_id: Uuid,
        data: CertificationData,
    ) -> Result<(), CertificationRepositoryError>;

    /// Prunes the id from the owner's list and deletes the row in one
    /// transaction. `NotFound` when the owner does not reference the id.
    async fn delete_for_owner(
        &self,
        owner: UserId,
        certification_id: Uuid,
    ) -> Result<(), CertificationRepositoryError>;
}
