use actix_web::{get, web, HttpResponse, Responder};
use serde_json::Value;
use tracing::error;

use crate::modules::stats::application::ports::incoming::use_cases::RelayExternalStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn relay(result: Result<Value, RelayExternalStatsError>, failure: &str) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            error!("{}: {}", failure, e);
            ApiResponse::internal_error(failure)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/github",
    tag = "stats",
    responses(
        (status = 200, description = "Code-hosting profile, relayed as received"),
        (status = 500, description = "Upstream failure", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/github")]
pub async fn github_profile_handler(data: web::Data<AppState>) -> impl Responder {
    relay(
        data.stats.relay.code_host_profile().await,
        "Failed to fetch GitHub profile",
    )
}

#[utoipa::path(
    get,
    path = "/api/github/calendar",
    tag = "stats",
    responses(
        (status = 200, description = "Contribution calendar, relayed as received"),
        (status = 500, description = "Upstream failure", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/github/calendar")]
pub async fn contribution_calendar_handler(data: web::Data<AppState>) -> impl Responder {
    relay(
        data.stats.relay.contribution_calendar().await,
        "Failed to fetch contribution calendar",
    )
}

#[utoipa::path(
    get,
    path = "/api/leetcode",
    tag = "stats",
    responses(
        (status = 200, description = "Coding-practice stats, relayed as received"),
        (status = 500, description = "Upstream failure", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/leetcode")]
pub async fn leetcode_stats_handler(data: web::Data<AppState>) -> impl Responder {
    relay(
        data.stats.relay.practice_stats().await,
        "Failed to fetch LeetCode stats",
    )
}
