use async_trait::async_trait;
use serde_json::Value;

use super::ExternalApiError;

#[async_trait]
pub trait PracticeStatsApi: Send + Sync {
    /// Profile and solved-problem counts of the configured account.
    async fn fetch_stats(&self) -> Result<Value, ExternalApiError>;
}
