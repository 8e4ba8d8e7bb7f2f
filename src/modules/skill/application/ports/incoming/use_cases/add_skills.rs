use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddSkillsError {
    #[error("Skills cannot be empty")]
    Empty,

    #[error("User not found")]
    OwnerNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddSkillsUseCase: Send + Sync {
    /// Appends to the owner's skill list as given, duplicates included.
    /// Returns the full list after the write.
    async fn execute(&self, skills: Vec<String>) -> Result<Vec<String>, AddSkillsError>;
}
