use async_trait::async_trait;

use crate::auth::application::helpers::{OwnerResolver, ResolveOwnerError};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::modules::skill::application::ports::incoming::use_cases::{
    AddSkillsError, AddSkillsUseCase,
};

pub struct AddSkillsService<R>
where
    R: UserRepository,
{
    repository: R,
    owner_resolver: OwnerResolver,
}

impl<R> AddSkillsService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R, owner_resolver: OwnerResolver) -> Self {
        Self {
            repository,
            owner_resolver,
        }
    }
}

#[async_trait]
impl<R> AddSkillsUseCase for AddSkillsService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, skills: Vec<String>) -> Result<Vec<String>, AddSkillsError> {
        if skills.is_empty() {
            return Err(AddSkillsError::Empty);
        }

        let owner = self.owner_resolver.resolve().await.map_err(|e| match e {
            ResolveOwnerError::NotFound => AddSkillsError::OwnerNotFound,
            ResolveOwnerError::RepositoryError(msg) => AddSkillsError::RepositoryError(msg),
        })?;

        self.repository
            .append_skills(owner, skills)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => AddSkillsError::OwnerNotFound,
                other => AddSkillsError::RepositoryError(other.to_string()),
            })
    }
}
