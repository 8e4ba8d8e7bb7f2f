use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::domain::entities::ProjectData;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    security(("BearerAuth" = [])),
    request_body = ProjectData,
    responses(
        (status = 201, description = "Project added", body = crate::api::schemas::Envelope),
        (status = 400, description = "Missing required fields", body = crate::api::schemas::Envelope),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::Envelope),
        (status = 404, description = "No owner registered", body = crate::api::schemas::Envelope),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<ProjectData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(req.into_inner()).await {
        Ok(project) => {
            info!(project_id = %project.id, "Project added");
            ApiResponse::created("Project added successfully", project)
        }

        Err(CreateProjectError::Validation(missing)) => {
            ApiResponse::bad_request(&missing.to_string())
        }

        Err(CreateProjectError::OwnerNotFound) => ApiResponse::not_found("User not found"),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Failed to add project: {}", e);
            ApiResponse::internal_error("Failed to add project")
        }
    }
}
