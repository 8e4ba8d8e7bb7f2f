use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "experiences",
    responses(
        (status = 200, description = "Experiences, newest first", body = crate::api::schemas::Envelope),
        (status = 500, description = "Store failure", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.get_list.execute().await {
        Ok(experiences) if experiences.is_empty() => ApiResponse::empty("No experiences found"),
        Ok(experiences) => ApiResponse::success("Experiences retrieved successfully", experiences),
        Err(e) => {
            error!("Failed to fetch experiences: {}", e);
            ApiResponse::internal_error("Failed to fetch experiences")
        }
    }
}
