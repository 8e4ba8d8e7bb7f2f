use std::sync::Arc;

use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveOwnerError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Resolves the single portfolio owner that every "add child" write targets.
///
/// A configured id wins. Otherwise the earliest-created user is looked up on
/// first use and cached for the life of the process. Failed lookups are not
/// cached, so a fresh install starts resolving once the admin registers.
#[derive(Clone)]
pub struct OwnerResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
    configured: Option<UserId>,
    cached: Arc<OnceCell<UserId>>,
}

impl OwnerResolver {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>, configured: Option<Uuid>) -> Self {
        Self {
            user_query,
            configured: configured.map(UserId::from),
            cached: Arc::new(OnceCell::new()),
        }
    }

    pub fn configured_id(&self) -> Option<UserId> {
        self.configured
    }

    pub async fn resolve(&self) -> Result<UserId, ResolveOwnerError> {
        if let Some(owner) = self.configured {
            return Ok(owner);
        }

        self.cached
            .get_or_try_init(|| async {
                match self.user_query.find_first().await {
                    Ok(Some(user)) => {
                        tracing::debug!(owner = %user.id, "Resolved portfolio owner");
                        Ok(UserId::from(user.id))
                    }
                    Ok(None) => Err(ResolveOwnerError::NotFound),
                    Err(UserQueryError::DatabaseError(msg))
                    | Err(UserQueryError::CorruptRecord(msg)) => {
                        Err(ResolveOwnerError::RepositoryError(msg))
                    }
                }
            })
            .await
            .copied()
    }
}
