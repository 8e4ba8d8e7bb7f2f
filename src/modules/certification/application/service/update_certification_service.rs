use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certification::application::domain::entities::CertificationData;
use crate::modules::certification::application::ports::incoming::use_cases::{
    UpdateCertificationError, UpdateCertificationUseCase,
};
use crate::modules::certification::application::ports::outgoing::{
    CertificationRepository, CertificationRepositoryError,
};

pub struct UpdateCertificationService<R>
where
    R: CertificationRepository,
{
    repository: R,
}

impl<R> UpdateCertificationService<R>
where
    R: CertificationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCertificationUseCase for UpdateCertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        certification_id: Uuid,
        data: CertificationData,
    ) -> Result<CertificationData, UpdateCertificationError> {
        data.validate()?;

        self.repository
            .update(certification_id, data.clone())
            .await
            .map_err(|e| match e {
                CertificationRepositoryError::NotFound => UpdateCertificationError::NotFound,
                other => UpdateCertificationError::RepositoryError(other.to_string()),
            })?;

        Ok(data)
    }
}
