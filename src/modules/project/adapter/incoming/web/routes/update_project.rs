use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::domain::entities::ProjectData;
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::shared::api::{parse_object_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Project id")),
    request_body = ProjectData,
    responses(
        (status = 200, description = "Project updated, input echoed", body = crate::api::schemas::Envelope),
        (status = 400, description = "Malformed id or missing fields", body = crate::api::schemas::Envelope),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::Envelope),
        (status = 404, description = "Project not found", body = crate::api::schemas::Envelope),
    )
)]
#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<ProjectData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = match parse_object_id(&path, "Project") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.project.update.execute(project_id, req.into_inner()).await {
        Ok(updated) => {
            info!(%project_id, "Project updated");
            ApiResponse::success("Project updated successfully", updated)
        }

        Err(UpdateProjectError::Validation(missing)) => {
            ApiResponse::bad_request(&missing.to_string())
        }

        Err(UpdateProjectError::NotFound) => ApiResponse::not_found("Project not found"),

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Failed to update project {}: {}", project_id, e);
            ApiResponse::internal_error("Failed to update project")
        }
    }
}
