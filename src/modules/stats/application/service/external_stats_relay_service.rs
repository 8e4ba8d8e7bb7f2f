use async_trait::async_trait;
use serde_json::Value;

use crate::modules::stats::application::ports::incoming::use_cases::{
    RelayExternalStatsError, RelayExternalStatsUseCase,
};
use crate::modules::stats::application::ports::outgoing::{
    CodeHostApi, ContributionCalendarApi, ExternalApiError, PracticeStatsApi,
};

pub struct ExternalStatsRelayService<C, P, K>
where
    C: CodeHostApi,
    P: PracticeStatsApi,
    K: ContributionCalendarApi,
{
    code_host: C,
    practice: P,
    calendar: K,
}

impl<C, P, K> ExternalStatsRelayService<C, P, K>
where
    C: CodeHostApi,
    P: PracticeStatsApi,
    K: ContributionCalendarApi,
{
    pub fn new(code_host: C, practice: P, calendar: K) -> Self {
        Self {
            code_host,
            practice,
            calendar,
        }
    }
}

fn upstream(e: ExternalApiError) -> RelayExternalStatsError {
    RelayExternalStatsError::Upstream(e.to_string())
}

#[async_trait]
impl<C, P, K> RelayExternalStatsUseCase for ExternalStatsRelayService<C, P, K>
where
    C: CodeHostApi,
    P: PracticeStatsApi,
    K: ContributionCalendarApi,
{
    async fn code_host_profile(&self) -> Result<Value, RelayExternalStatsError> {
        self.code_host.profile().await.map_err(upstream)
    }

    async fn practice_stats(&self) -> Result<Value, RelayExternalStatsError> {
        self.practice.fetch_stats().await.map_err(upstream)
    }

    async fn contribution_calendar(&self) -> Result<Value, RelayExternalStatsError> {
        self.calendar.fetch_calendar().await.map_err(upstream)
    }
}
