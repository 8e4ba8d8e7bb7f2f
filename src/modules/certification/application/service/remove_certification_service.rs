use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::helpers::{OwnerResolver, ResolveOwnerError};
use crate::modules::certification::application::ports::incoming::use_cases::{
    RemoveCertificationError, RemoveCertificationUseCase,
};
use crate::modules::certification::application::ports::outgoing::{
    CertificationRepository, CertificationRepositoryError,
};

pub struct RemoveCertificationService<R>
where
    R: CertificationRepository,
{
    repository: R,
    owner_resolver: OwnerResolver,
}

impl<R> RemoveCertificationService<R>
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
impl<R> RemoveCertificationUseCase for RemoveCertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(&self, certification_id: Uuid) -> Result<(), RemoveCertificationError> {
        let owner = self.owner_resolver.resolve().await.map_err(|e| match e {
            ResolveOwnerError::NotFound => RemoveCertificationError::OwnerNotFound,
            ResolveOwnerError::RepositoryError(msg) => {
                RemoveCertificationError::RepositoryError(msg)
            }
        })?;

        self.repository
            .delete_for_owner(owner, certification_id)
            .await
            .map_err(|e| match e {
                CertificationRepositoryError::NotFound => RemoveCertificationError::NotFound,
                CertificationRepositoryError::OwnerNotFound => {
                    RemoveCertificationError::OwnerNotFound
                }
                other => RemoveCertificationError::RepositoryError(other.to_string()),
            })
    }
}
