use async_trait::async_trait;

use crate::auth::application::helpers::{OwnerResolver, ResolveOwnerError};
use crate::modules::certification::application::domain::entities::{
    Certification, CertificationData,
};
use crate::modules::certification::application::ports::incoming::use_cases::{
    CreateCertificationError, CreateCertificationUseCase,
};
use crate::modules::certification::application::ports::outgoing::{
    CertificationRepository, CertificationRepositoryError,
};

pub struct CreateCertificationService<R>
where
    R: CertificationRepository,
{
    repository: R,
    owner_resolver: OwnerResolver,
}

impl<R> CreateCertificationService<R>
where
    R: CertificationRepository,
{
    pub fn new(repository: R, owner_resolver: OwnerResolver) -> Self {
        Self {
            repository,
            owner_resolver,
        }
    }
}

#[async_trait]
impl<R> CreateCertificationUseCase for CreateCertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CertificationData,
    ) -> Result<Certification, CreateCertificationError> {
        data.validate()?;

        let owner = self.owner_resolver.resolve().await.map_err(|e| match e {
            ResolveOwnerError::NotFound => CreateCertificationError::OwnerNotFound,
            ResolveOwnerError::RepositoryError(msg) => {
                CreateCertificationError::RepositoryError(msg)
            }
        })?;

        self.repository
            .create_for_owner(owner, data)
            .await
            .map_err(|e| match e {
                CertificationRepositoryError::OwnerNotFound => {
                    CreateCertificationError::OwnerNotFound
                }
                other => CreateCertificationError::RepositoryError(other.to_string()),
            })
    }
}
