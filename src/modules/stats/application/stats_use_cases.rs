use std::sync::Arc;

use crate::modules::stats::application::ports::incoming::use_cases::{
    FetchRepositoryStatsUseCase, RelayExternalStatsUseCase,
};

#[derive(Clone)]
pub struct StatsUseCases {
    pub repositories: Arc<dyn FetchRepositoryStatsUseCase + Send + Sync>,
    pub relay: Arc<dyn RelayExternalStatsUseCase + Send + Sync>,
}
