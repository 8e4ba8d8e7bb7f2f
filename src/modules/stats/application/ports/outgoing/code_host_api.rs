use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

use crate::modules::stats::application::domain::entities::Repository;

pub type LanguageBytes = HashMap<String, u64>;

/// Failure of a single outbound call. Shared by every external port.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExternalApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Upstream answered with status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Read-only view of one account on the code-hosting platform.
#[async_trait]
pub trait CodeHostApi: Send + Sync {
    /// Account profile as returned, error payloads included.
    async fn profile(&self) -> Result<Value, ExternalApiError>;

    /// First page of the account's repositories, up to 100.
    async fn list_repositories(&self) -> Result<Vec<Repository>, ExternalApiError>;

    /// Author dates of the repository's commits since the configured cutoff, up to 100.
    async fn commit_dates(&self, repository: &str) -> Result<Vec<String>, ExternalApiError>;

    async fn languages(&self, languages_url: &str) -> Result<LanguageBytes, ExternalApiError>;
}
