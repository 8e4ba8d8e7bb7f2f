mod external_stats;
mod repository_stats;

pub use external_stats::{
    contribution_calendar_handler, github_profile_handler, leetcode_stats_handler,
};
pub use repository_stats::{
    commit_histogram_handler, language_totals_handler, star_total_handler,
    top_repositories_handler,
};
pub use external_stats::{
    __path_contribution_calendar_handler, __path_github_profile_handler,
    __path_leetcode_stats_handler,
};
pub use repository_stats::{
    __path_commit_histogram_handler, __path_language_totals_handler, __path_star_total_handler,
    __path_top_repositories_handler,
};
