use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{Project, ProjectData};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Inserts the project and appends its id to the owner's list in one
    /// transaction.
    async fn create_for_owner(
        &self,
        owner: UserId,
        data: ProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    /// Replaces the domain fields. Owner lists are left alone.
    async fn update(
        &self,
        project_id: Uuid,
        data: ProjectData,
    ) -> Result<(), ProjectRepositoryError>;

    /// Prunes the id from the owner's list and deletes the row in one
    /// transaction. `NotFound` when the owner does not reference the id.
    async fn delete_for_owner(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<(), ProjectRepositoryError>;
}
