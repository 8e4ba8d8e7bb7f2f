use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::fan_out::{fan_out, MAX_IN_FLIGHT};
use crate::modules::stats::application::domain::entities::{
    DailyCommits, Repository, StarTotal, TopRepository,
};
use crate::modules::stats::application::ports::incoming::use_cases::{
    FetchRepositoryStatsError, FetchRepositoryStatsUseCase,
};
use crate::modules::stats::application::ports::outgoing::CodeHostApi;

const TOP_REPOSITORIES: usize = 6;

pub struct RepositoryStatsService<C>
where
    C: CodeHostApi + 'static,
{
    api: Arc<C>,
}

impl<C> RepositoryStatsService<C>
where
    C: CodeHostApi + 'static,
{
    pub fn new(api: C) -> Self {
        Self { api: Arc::new(api) }
    }

    async fn listing(&self) -> Result<Vec<Repository>, FetchRepositoryStatsError> {
        self.api
            .list_repositories()
            .await
            .map_err(|e| FetchRepositoryStatsError::ListingFailed(e.to_string()))
    }
}

#[async_trait]
impl<C> FetchRepositoryStatsUseCase for RepositoryStatsService<C>
where
    C: CodeHostApi + 'static,
{
    async fn commit_histogram(&self) -> Result<Vec<DailyCommits>, FetchRepositoryStatsError> {
        let repositories = self.listing().await?;

        let api = Arc::clone(&self.api);
        let batches = fan_out(repositories, MAX_IN_FLIGHT, move |repo| {
            let api = Arc::clone(&api);
            async move { api.commit_dates(&repo.name).await }
        })
        .await;

        let mut per_day: BTreeMap<String, u64> = BTreeMap::new();
        for date in batches.into_iter().flatten() {
            // ISO-8601 timestamps, bucketed by calendar day
            if let Some(day) = date.get(..10) {
                *per_day.entry(day.to_string()).or_default() += 1;
            }
        }

        Ok(per_day
            .into_iter()
            .map(|(date, count)| DailyCommits { date, count })
            .collect())
    }

    async fn language_totals(&self) -> Result<BTreeMap<String, u64>, FetchRepositoryStatsError> {
        let repositories = self.listing().await?;

        let api = Arc::clone(&self.api);
        let per_repository = fan_out(repositories, MAX_IN_FLIGHT, move |repo| {
            let api = Arc::clone(&api);
            async move { api.languages(&repo.languages_url).await }
        })
        .await;

        let mut totals: BTreeMap<String, u64> = BTreeMap::new();
        for (language, bytes) in per_repository.into_iter().flatten() {
            *totals.entry(language).or_default() += bytes;
        }

        Ok(totals)
    }

    async fn star_total(&self) -> Result<StarTotal, FetchRepositoryStatsError> {
        let repositories = self.listing().await?;

        Ok(StarTotal {
            stars: repositories.iter().map(|r| r.stargazers_count).sum(),
        })
    }

    async fn top_repositories(&self) -> Result<Vec<TopRepository>, FetchRepositoryStatsError> {
        let mut repositories = self.listing().await?;

        // stable: equal counts keep listing order
        repositories.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));

        Ok(repositories
            .into_iter()
            .take(TOP_REPOSITORIES)
            .map(TopRepository::from)
            .collect())
    }
}
