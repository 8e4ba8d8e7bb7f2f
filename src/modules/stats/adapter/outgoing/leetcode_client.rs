use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::http::relay_json;
use crate::config::LeetCodeSettings;
use crate::modules::stats::application::ports::outgoing::{ExternalApiError, PracticeStatsApi};

const STATS_QUERY: &str = r#"query userStats($username: String!) {
  matchedUser(username: $username) {
    profile {
      realName
      userAvatar
      ranking
    }
    submitStats {
      acSubmissionNum {
        difficulty
        count
      }
    }
  }
}"#;

/// GraphQL client for the coding-practice platform.
pub struct LeetCodeClient {
    client: Client,
    graphql_url: String,
    username: String,
}

impl LeetCodeClient {
    pub fn new(client: Client, settings: &LeetCodeSettings) -> Self {
        Self {
            client,
            graphql_url: settings.graphql_url.clone(),
            username: settings.username.clone(),
        }
    }

    /// Origin of the GraphQL endpoint, sent as the referer.
    fn referer(&self) -> String {
        match reqwest::Url::parse(&self.graphql_url) {
            Ok(url) => url.origin().ascii_serialization(),
            Err(_) => self.graphql_url.clone(),
        }
    }
}

#[async_trait]
impl PracticeStatsApi for LeetCodeClient {
    async fn fetch_stats(&self) -> Result<Value, ExternalApiError> {
        let request = self
            .client
            .post(&self.graphql_url)
            .header("Referer", self.referer())
            .json(&json!({
                "query": STATS_QUERY,
                "variables": { "username": self.username },
            }));

        relay_json(request).await
    }
}
