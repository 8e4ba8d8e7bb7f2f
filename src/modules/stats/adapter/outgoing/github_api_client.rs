use async_trait::async_trait;
use reqwest::{Client, IntoUrl, RequestBuilder, Url};
use serde::Deserialize;
use serde_json::Value;

use super::http::{relay_json, send_json};
use crate::config::GithubSettings;
use crate::modules::stats::application::domain::entities::Repository;
use crate::modules::stats::application::ports::outgoing::{
    CodeHostApi, ExternalApiError, LanguageBytes,
};

const PAGE_SIZE: &str = "100";

#[derive(Deserialize)]
struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    author: Option<CommitAuthor>,
}

#[derive(Deserialize)]
struct CommitAuthor {
    date: Option<String>,
}

/// REST client for one code-hosting account.
#[derive(Clone)]
pub struct GithubApiClient {
    client: Client,
    api_url: String,
    username: String,
    token: String,
    commits_since: String,
}

impl GithubApiClient {
    pub fn new(client: Client, settings: &GithubSettings) -> Self {
        Self {
            client,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            username: settings.username.clone(),
            token: settings.token.clone(),
            commits_since: settings.commits_since.clone(),
        }
    }

    fn url_with(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ExternalApiError> {
        Url::parse_with_params(&format!("{}{}", self.api_url, path), params)
            .map_err(|e| ExternalApiError::Transport(e.to_string()))
    }

    fn get<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        let request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");

        if self.token.is_empty() {
            request
        } else {
            request.bearer_auth(&self.token)
        }
    }
}

#[async_trait]
impl CodeHostApi for GithubApiClient {
    async fn profile(&self) -> Result<Value, ExternalApiError> {
        let url = format!("{}/users/{}", self.api_url, self.username);
        relay_json(self.get(&url)).await
    }

    async fn list_repositories(&self) -> Result<Vec<Repository>, ExternalApiError> {
        let url = self.url_with(
            &format!("/users/{}/repos", self.username),
            &[("per_page", PAGE_SIZE)],
        )?;
        send_json(self.get(url)).await
    }

    async fn commit_dates(&self, repository: &str) -> Result<Vec<String>, ExternalApiError> {
        let url = self.url_with(
            &format!("/repos/{}/{}/commits", self.username, repository),
            &[("since", self.commits_since.as_str()), ("per_page", PAGE_SIZE)],
        )?;

        let entries: Vec<CommitEntry> = send_json(self.get(url)).await?;

        Ok(entries
            .into_iter()
            .filter_map(|entry| entry.commit.author.and_then(|author| author.date))
            .collect())
    }

    async fn languages(&self, languages_url: &str) -> Result<LanguageBytes, ExternalApiError> {
        send_json(self.get(languages_url)).await
    }
}
