use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::auth::application::helpers::{OwnerResolver, ResolveOwnerError};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsError, GetSkillsUseCase, ProjectSkills,
};

/// Reads skills from the tags of the owner's projects, not from the owner's
/// own skill list.
pub struct GetSkillsService<U, P>
where
    U: UserQuery,
    P: ProjectQuery,
{
    user_query: U,
    project_query: P,
    owner_resolver: OwnerResolver,
}

impl<U, P> GetSkillsService<U, P>
where
    U: UserQuery,
    P: ProjectQuery,
{
    pub fn new(user_query: U, project_query: P, owner_resolver: OwnerResolver) -> Self {
        Self {
            user_query,
            project_query,
            owner_resolver,
        }
    }
}

#[async_trait]
impl<U, P> GetSkillsUseCase for GetSkillsService<U, P>
where
    U: UserQuery + Send + Sync,
    P: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<ProjectSkills, GetSkillsError> {
        let owner = self.owner_resolver.resolve().await.map_err(|e| match e {
            ResolveOwnerError::NotFound => GetSkillsError::OwnerNotFound,
            ResolveOwnerError::RepositoryError(msg) => GetSkillsError::QueryError(msg),
        })?;

        let user = self
            .user_query
            .find_by_id(owner.value())
            .await
            .map_err(|e| GetSkillsError::QueryError(e.to_string()))?
            .ok_or(GetSkillsError::OwnerNotFound)?;

        if user.projects.is_empty() {
            return Ok(ProjectSkills::NoProjects);
        }

        let projects = self
            .project_query
            .list_by_ids(&user.projects)
            .await
            .map_err(|e| GetSkillsError::QueryError(e.to_string()))?;

        let tags: BTreeSet<String> = projects
            .into_iter()
            .flat_map(|project| project.data.skills)
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        if tags.is_empty() {
            Ok(ProjectSkills::NoSkills)
        } else {
            Ok(ProjectSkills::Skills(tags.into_iter().collect()))
        }
    }
}
