use async_trait::async_trait;
use serde_json::Value;

use super::ExternalApiError;

#[async_trait]
pub trait ContributionCalendarApi: Send + Sync {
    async fn fetch_calendar(&self) -> Result<Value, ExternalApiError>;
}
