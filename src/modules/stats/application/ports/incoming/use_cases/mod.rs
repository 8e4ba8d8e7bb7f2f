pub mod fetch_repository_stats;
pub mod relay_external_stats;

pub use fetch_repository_stats::{FetchRepositoryStatsError, FetchRepositoryStatsUseCase};
pub use relay_external_stats::{RelayExternalStatsError, RelayExternalStatsUseCase};
