use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Projects, newest first", body = crate::api::schemas::Envelope),
        (status = 500, description = "Store failure", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(projects) if projects.is_empty() => ApiResponse::empty("No projects found"),
        Ok(projects) => ApiResponse::success("Projects retrieved successfully", projects),
        Err(e) => {
            error!("Failed to fetch projects: {}", e);
            ApiResponse::internal_error("Failed to fetch projects")
        }
    }
}
