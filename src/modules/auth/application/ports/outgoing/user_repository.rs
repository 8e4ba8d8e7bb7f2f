use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored user is corrupt: {0}")]
    CorruptRecord(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates the user with empty skill and back-reference lists.
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    /// Appends skills without dedup and returns the resulting list.
    async fn append_skills(
        &self,
        owner: UserId,
        skills: Vec<String>,
    ) -> Result<Vec<String>, UserRepositoryError>;
}
