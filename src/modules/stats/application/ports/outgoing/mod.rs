pub mod code_host_api;
pub mod contribution_calendar_api;
pub mod practice_stats_api;

pub use code_host_api::{CodeHostApi, ExternalApiError, LanguageBytes};
pub use contribution_calendar_api::ContributionCalendarApi;
pub use practice_stats_api::PracticeStatsApi;
