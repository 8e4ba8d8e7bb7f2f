use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetSingleExperienceError, GetSingleExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;

pub struct GetSingleExperienceService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> GetSingleExperienceService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleExperienceUseCase for GetSingleExperienceService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self, experience_id: Uuid) -> Result<Experience, GetSingleExperienceError> {
        self.query
            .get_by_id(experience_id)
            .await
            .map_err(|e| GetSingleExperienceError::QueryError(e.to_string()))?
            .ok_or(GetSingleExperienceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::modules::experience::application::domain::entities::ExperienceData;
    use crate::modules::experience::application::ports::outgoing::ExperienceQueryError;

    /* --------------------------------------------------
     * Mock ExperienceQuery
     * -------------------------------------------------- */

    struct MockExperienceQuery {
        result: Result<Option<Experience>, ExperienceQueryError>,
    }

    #[async_trait]
    impl ExperienceQuery for MockExperienceQuery {
        async fn list(&self) -> Result<Vec<Experience>, ExperienceQueryError> {
            unimplemented!("not used in GetSingleExperienceService tests")
        }

        async fn get_by_id(
            &self,
            _experience_id: Uuid,
        ) -> Result<Option<Experience>, ExperienceQueryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn execute_success() {
        let id = Uuid::new_v4();
        let service = GetSingleExperienceService::new(MockExperienceQuery {
            result: Ok(Some(Experience {
                id,
                data: ExperienceData::default(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })),
        });

        let experience = service.execute(id).await.unwrap();
        assert_eq!(experience.id, id);
    }

    #[tokio::test]
    async fn execute_not_found() {
        let service = GetSingleExperienceService::new(MockExperienceQuery { result: Ok(None) });

        let result = service.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(GetSingleExperienceError::NotFound)));
    }

    #[tokio::test]
    async fn execute_query_error() {
        let service = GetSingleExperienceService::new(MockExperienceQuery {
            result: Err(ExperienceQueryError::SerializationError("bad json".into())),
        });

        let result = service.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(GetSingleExperienceError::QueryError(_))));
    }
}
