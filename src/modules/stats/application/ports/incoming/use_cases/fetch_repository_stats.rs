use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::modules::stats::application::domain::entities::{
    DailyCommits, StarTotal, TopRepository,
};

/// Only the initial listing call can fail a request. Per-repository
/// failures are skipped.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchRepositoryStatsError {
    #[error("Repository listing failed: {0}")]
    ListingFailed(String),
}

#[async_trait]
pub trait FetchRepositoryStatsUseCase: Send + Sync {
    /// Commit counts per day across non-fork repositories, oldest day first.
    async fn commit_histogram(&self) -> Result<Vec<DailyCommits>, FetchRepositoryStatsError>;

    /// Bytes per language summed across non-fork repositories.
    async fn language_totals(&self) -> Result<BTreeMap<String, u64>, FetchRepositoryStatsError>;

    /// Stars summed over every repository, forks included.
    async fn star_total(&self) -> Result<StarTotal, FetchRepositoryStatsError>;

    async fn top_repositories(&self) -> Result<Vec<TopRepository>, FetchRepositoryStatsError>;
}
