use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RelayExternalStatsError {
    #[error("Upstream call failed: {0}")]
    Upstream(String),
}

/// Single-call proxies. Bodies are passed through untouched.
#[async_trait]
pub trait RelayExternalStatsUseCase: Send + Sync {
    async fn code_host_profile(&self) -> Result<Value, RelayExternalStatsError>;

    async fn practice_stats(&self) -> Result<Value, RelayExternalStatsError>;

    async fn contribution_calendar(&self) -> Result<Value, RelayExternalStatsError>;
}
