use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::experience::application::domain::entities::ExperienceData;
use crate::modules::experience::application::ports::incoming::use_cases::CreateExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/experiences",
    tag = "experiences",
    security(("BearerAuth" = [])),
    request_body = ExperienceData,
    responses(
        (status = 201, description = "Experience added", body = crate::api::schemas::Envelope),
        (status = 400, description = "Missing required fields", body = crate::api::schemas::Envelope),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::Envelope),
        (status = 404, description = "No owner registered", body = crate::api::schemas::Envelope),
    )
)]
#[post("/api/experiences")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    req: web::Json<ExperienceData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.create.execute(req.into_inner()).await {
        Ok(experience) => {
            info!(experience_id = %experience.id, "Experience added");
            ApiResponse::created("Experience added successfully", experience)
        }

        Err(CreateExperienceError::Validation(missing)) => {
            ApiResponse::bad_request(&missing.to_string())
        }

        Err(CreateExperienceError::OwnerNotFound) => ApiResponse::not_found("User not found"),

        Err(CreateExperienceError::RepositoryError(e)) => {
            error!("Failed to add experience: {}", e);
            ApiResponse::internal_error("Failed to add experience")
        }
    }
}
