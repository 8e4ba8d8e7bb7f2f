use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::Experience;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleExperienceError {
    #[error("Experience not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSingleExperienceUseCase: Send + Sync {
    async fn execute(&self, experience_id: Uuid) -> Result<Experience, GetSingleExperienceError>;
}
