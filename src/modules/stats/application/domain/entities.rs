use serde::{Deserialize, Serialize};

/// One entry of the account's repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub languages_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct DailyCommits {
    /// `YYYY-MM-DD`
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct StarTotal {
    pub stars: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct TopRepository {
    pub name: String,
    pub url: String,
    pub stars: u64,
}

impl From<Repository> for TopRepository {
    fn from(repo: Repository) -> Self {
        Self {
            name: repo.name,
            url: repo.html_url,
            stars: repo.stargazers_count,
        }
    }
}
