use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::RemoveProjectError;
use crate::shared::api::{parse_object_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project removed", body = crate::api::schemas::Envelope),
        (status = 400, description = "Missing or malformed id", body = crate::api::schemas::Envelope),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::Envelope),
        (status = 404, description = "Owner or project not found", body = crate::api::schemas::Envelope),
    )
)]
#[delete("/api/projects/{id}")]
pub async fn remove_project_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = match parse_object_id(&path, "Project") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.project.remove.execute(project_id).await {
        Ok(()) => {
            info!(%project_id, "Project removed");
            ApiResponse::empty("Project removed successfully")
        }

        Err(RemoveProjectError::OwnerNotFound) => ApiResponse::not_found("User not found"),

        Err(RemoveProjectError::NotFound) => ApiResponse::not_found("Project not found"),

        Err(RemoveProjectError::RepositoryError(e)) => {
            error!("Failed to remove project {}: {}", project_id, e);
            ApiResponse::internal_error("Failed to remove project")
        }
    }
}
