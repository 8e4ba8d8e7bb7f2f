use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::{parse_object_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = crate::api::schemas::Envelope),
        (status = 400, description = "Missing or malformed id", body = crate::api::schemas::Envelope),
        (status = 404, description = "Project not found", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = match parse_object_id(&path, "Project") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.project.get_single.execute(project_id).await {
        Ok(project) => ApiResponse::success("Project retrieved successfully", project),

        Err(GetSingleProjectError::NotFound) => ApiResponse::not_found("Project not found"),

        Err(GetSingleProjectError::QueryError(e)) => {
            error!("Failed to fetch project {}: {}", project_id, e);
            ApiResponse::internal_error("Failed to fetch project")
        }
    }
}
