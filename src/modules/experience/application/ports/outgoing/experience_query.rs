use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::Experience;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    /// Every experience, newest first.
    async fn list(&self) -> Result<Vec<Experience>, ExperienceQueryError>;

    async fn get_by_id(
        &self,
        experience_id: Uuid,
    ) -> Result<Option<Experience>, ExperienceQueryError>;

}
