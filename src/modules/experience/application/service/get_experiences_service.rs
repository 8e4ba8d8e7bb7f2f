use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperiencesError, GetExperiencesUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;

pub struct GetExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> GetExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetExperiencesUseCase for GetExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError> {
        self.query
            .list()
            .await
            .map_err(|e| GetExperiencesError::QueryError(e.to_string()))
    }
}
