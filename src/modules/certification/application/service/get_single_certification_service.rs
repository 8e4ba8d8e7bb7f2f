use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::certification::application::ports::incoming::use_cases::{
    GetSingleCertificationError, GetSingleCertificationUseCase,
};
use crate::modules::certification::application::ports::outgoing::CertificationQuery;

pub struct GetSingleCertificationService<Q>
where
    Q: CertificationQuery,
{
    query: Q,
}

impl<Q> GetSingleCertificationService<Q>
where
    Q: CertificationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleCertificationUseCase for GetSingleCertificationService<Q>
where
    Q: CertificationQuery + Send + Sync,
{
    async fn execute(
        &self,
        certification_id: Uuid,
    ) -> Result<Certification, GetSingleCertificationError> {
        self.query
            .get_by_id(certification_id)
            .await
            .map_err(|e| GetSingleCertificationError::QueryError(e.to_string()))?
            .ok_or(GetSingleCertificationError::NotFound)
    }
}
