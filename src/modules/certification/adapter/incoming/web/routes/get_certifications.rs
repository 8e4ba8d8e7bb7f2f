use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/certifications",
    tag = "certifications",
    responses(
        (status = 200, description = "Certifications, newest first", body = crate::api::schemas::Envelope),
        (status = 500, description = "Store failure", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/certifications")]
pub async fn get_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.certification.get_list.execute().await {
        Ok(certifications) if certifications.is_empty() => {
            ApiResponse::empty("No certifications found")
        }
        Ok(certifications) => {
            ApiResponse::success("Certifications retrieved successfully", certifications)
        }
        Err(e) => {
            error!("Failed to fetch certifications: {}", e);
            ApiResponse::internal_error("Failed to fetch certifications")
        }
    }
}
