use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::http::relay_json;
use crate::modules::stats::application::ports::outgoing::{
    ContributionCalendarApi, ExternalApiError,
};

/// Public contribution-calendar service. No authentication.
pub struct ContributionsClient {
    client: Client,
    url: String,
}

impl ContributionsClient {
    pub fn new(client: Client, api_url: &str, username: &str) -> Self {
        Self {
            client,
            url: format!("{}/{}", api_url.trim_end_matches('/'), username),
        }
    }
}

#[async_trait]
impl ContributionCalendarApi for ContributionsClient {
    async fn fetch_calendar(&self) -> Result<Value, ExternalApiError> {
        relay_json(self.client.get(&self.url)).await
    }
}
