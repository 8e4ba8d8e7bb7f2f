use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::experience::application::ports::incoming::use_cases::GetSingleExperienceError;
use crate::shared::api::{parse_object_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences/{id}",
    tag = "experiences",
    params(("id" = String, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience", body = crate::api::schemas::Envelope),
        (status = 400, description = "Missing or malformed id", body = crate::api::schemas::Envelope),
        (status = 404, description = "Experience not found", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/experiences/{id}")]
pub async fn get_single_experience_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = match parse_object_id(&path, "Experience") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.experience.get_single.execute(experience_id).await {
        Ok(experience) => ApiResponse::success("Experience retrieved successfully", experience),

        Err(GetSingleExperienceError::NotFound) => ApiResponse::not_found("Experience not found"),

        Err(GetSingleExperienceError::QueryError(e)) => {
            error!("Failed to fetch experience {}: {}", experience_id, e);
            ApiResponse::internal_error("Failed to fetch experience")
        }
    }
}
