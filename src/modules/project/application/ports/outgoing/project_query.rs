use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Every project, newest first.
    async fn list(&self) -> Result<Vec<Project>, ProjectQueryError>;

    async fn get_by_id(&self, project_id: Uuid) -> Result<Option<Project>, ProjectQueryError>;

    /// Projects whose id is in `ids`, newest first. Unknown ids are ignored.
    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Project>, ProjectQueryError>;
}
