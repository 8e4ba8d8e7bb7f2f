use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::experience::application::domain::entities::ExperienceData;
use crate::modules::experience::application::ports::incoming::use_cases::UpdateExperienceError;
use crate::shared::api::{parse_object_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/experiences/{id}",
    tag = "experiences",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Experience id")),
    request_body = ExperienceData,
    responses(
        (status = 200, description = "Experience updated, input echoed", body = crate::api::schemas::Envelope),
        (status = 400, description = "Malformed id or missing fields", body = crate::api::schemas::Envelope),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::Envelope),
        (status = 404, description = "Experience not found", body = crate::api::schemas::Envelope),
    )
)]
#[put("/api/experiences/{id}")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<ExperienceData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = match parse_object_id(&path, "Experience") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.experience.update.execute(experience_id, req.into_inner()).await {
        Ok(updated) => {
            info!(%experience_id, "Experience updated");
            ApiResponse::success("Experience updated successfully", updated)
        }

        Err(UpdateExperienceError::Validation(missing)) => {
            ApiResponse::bad_request(&missing.to_string())
        }

        Err(UpdateExperienceError::NotFound) => ApiResponse::not_found("Experience not found"),

        Err(UpdateExperienceError::RepositoryError(e)) => {
            error!("Failed to update experience {}: {}", experience_id, e);
            ApiResponse::internal_error("Failed to update experience")
        }
    }
}
