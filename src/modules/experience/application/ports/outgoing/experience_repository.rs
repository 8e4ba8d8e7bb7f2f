use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::experience::application::domain::entities::{Experience, ExperienceData};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Inserts the experience and appends its id to the owner's list in one
    /// transaction.
    async fn create_for_owner(
        &self,
        owner: UserId,
        data: ExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError>;

    /// Replaces the domain fields. Owner lists are left alone.
    async fn update(
        &self,
        experience_id: Uuid,
        data: ExperienceData,
    ) -> Result<(), ExperienceRepositoryError>;

    /// Prunes the id from the owner's list and deletes the row in one
    /// transaction. `NotFound` when the owner does not reference the id.
    async fn delete_for_owner(
        &self,
        owner: UserId,
        experience_id: Uuid,
    ) -> Result<(), ExperienceRepositoryError>;
}
