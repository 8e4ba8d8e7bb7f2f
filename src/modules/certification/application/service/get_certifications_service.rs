use async_trait::async_trait;

use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::certification::application::ports::incoming::use_cases::{
    GetCertificationsError, GetCertificationsUseCase,
};
use crate::modules::certification::application::ports::outgoing::CertificationQuery;

pub struct GetCertificationsService<Q>
where
    Q: CertificationQuery,
{
    query: Q,
}

impl<Q> GetCertificationsService<Q>
where
    Q: CertificationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCertificationsUseCase for GetCertificationsService<Q>
where
    Q: CertificationQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Certification>, GetCertificationsError> {
        self.query
            .list()
            .await
            .map_err(|e| GetCertificationsError::QueryError(e.to_string()))
    }
}
