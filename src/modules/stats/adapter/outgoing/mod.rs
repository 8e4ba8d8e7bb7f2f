mod contributions_client;
mod github_api_client;
mod http;
mod leetcode_client;

pub use contributions_client::ContributionsClient;
pub use github_api_client::GithubApiClient;
pub use http::build_http_client;
pub use leetcode_client::LeetCodeClient;
