mod external_stats_relay_service;
mod fan_out;
mod repository_stats_service;

pub use external_stats_relay_service::ExternalStatsRelayService;
pub use fan_out::{fan_out, MAX_IN_FLIGHT};
pub use repository_stats_service::RepositoryStatsService;
