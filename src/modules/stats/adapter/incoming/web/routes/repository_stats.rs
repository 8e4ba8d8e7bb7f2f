//! Aggregates over the configured account's repositories.
//!
//! Successful bodies are bare JSON. Failures use the standard envelope.

use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::stats::application::ports::incoming::use_cases::FetchRepositoryStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn listing_failed(view: &str, e: FetchRepositoryStatsError) -> HttpResponse {
    error!("Failed to build {}: {}", view, e);
    ApiResponse::internal_error("Failed to fetch repositories")
}

#[utoipa::path(
    get,
    path = "/api/github/commits",
    tag = "stats",
    responses(
        (status = 200, description = "Commits per day, oldest first", body = [crate::modules::stats::application::domain::entities::DailyCommits]),
        (status = 500, description = "Repository listing failed", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/github/commits")]
pub async fn commit_histogram_handler(data: web::Data<AppState>) -> impl Responder {
    match data.stats.repositories.commit_histogram().await {
        Ok(histogram) => HttpResponse::Ok().json(histogram),
        Err(e) => listing_failed("commit histogram", e),
    }
}

#[utoipa::path(
    get,
    path = "/api/github/languages",
    tag = "stats",
    responses(
        (status = 200, description = "Bytes per language, keyed by language name"),
        (status = 500, description = "Repository listing failed", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/github/languages")]
pub async fn language_totals_handler(data: web::Data<AppState>) -> impl Responder {
    match data.stats.repositories.language_totals().await {
        Ok(totals) => HttpResponse::Ok().json(totals),
        Err(e) => listing_failed("language totals", e),
    }
}

#[utoipa::path(
    get,
    path = "/api/github/stars",
    tag = "stats",
    responses(
        (status = 200, description = "Stars across all repositories", body = crate::modules::stats::application::domain::entities::StarTotal),
        (status = 500, description = "Repository listing failed", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/github/stars")]
pub async fn star_total_handler(data: web::Data<AppState>) -> impl Responder {
    match data.stats.repositories.star_total().await {
        Ok(total) => HttpResponse::Ok().json(total),
        Err(e) => listing_failed("star total", e),
    }
}

#[utoipa::path(
    get,
    path = "/api/github/top-repos",
    tag = "stats",
    responses(
        (status = 200, description = "Six most starred repositories", body = [crate::modules::stats::application::domain::entities::TopRepository]),
        (status = 500, description = "Repository listing failed", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/github/top-repos")]
pub async fn top_repositories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.stats.repositories.top_repositories().await {
        Ok(top) => HttpResponse::Ok().json(top),
        Err(e) => listing_failed("top repositories", e),
    }
}
