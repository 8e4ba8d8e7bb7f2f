use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::experience::application::ports::incoming::use_cases::RemoveExperienceError;
use crate::shared::api::{parse_object_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/experiences/{id}",
    tag = "experiences",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience removed", body = crate::api::schemas::Envelope),
        (status = 400, description = "Missing or malformed id", body = crate::api::schemas::Envelope),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::Envelope),
        (status = 404, description = "Owner or experience not found", body = crate::api::schemas::Envelope),
    )
)]
#[delete("/api/experiences/{id}")]
pub async fn remove_experience_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = match parse_object_id(&path, "Experience") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.experience.remove.execute(experience_id).await {
        Ok(()) => {
            info!(%experience_id, "Experience removed");
            ApiResponse::empty("Experience removed successfully")
        }

        Err(RemoveExperienceError::OwnerNotFound) => ApiResponse::not_found("User not found"),

        Err(RemoveExperienceError::NotFound) => ApiResponse::not_found("Experience not found"),

        Err(RemoveExperienceError::RepositoryError(e)) => {
            error!("Failed to remove experience {}: {}", experience_id, e);
            ApiResponse::internal_error("Failed to remove experience")
        }
    }
}
