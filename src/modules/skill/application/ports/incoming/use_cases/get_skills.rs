use async_trait::async_trait;

/// Skill tags gathered from the owner's projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSkills {
    NoProjects,
    NoSkills,
    /// Deduplicated, sorted.
    Skills(Vec<String>),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("User not found")]
    OwnerNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProjectSkills, GetSkillsError>;
}
