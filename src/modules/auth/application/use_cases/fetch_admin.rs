use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{User, UserId},
    ports::outgoing::UserQuery,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchAdminError {
    #[error("User not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchAdminUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<User, FetchAdminError>;
}

#[derive(Debug, Clone)]
pub struct FetchAdminUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchAdminUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchAdminUseCase for FetchAdminUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<User, FetchAdminError> {
        self.query
            .find_by_id(user_id.value())
            .await
            .map_err(|e| FetchAdminError::QueryError(e.to_string()))?
            .ok_or(FetchAdminError::NotFound)
    }
}
