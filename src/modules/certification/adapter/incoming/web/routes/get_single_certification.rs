use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::certification::application::ports::incoming::use_cases::GetSingleCertificationError;
use crate::shared::api::{parse_object_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/certifications/{id}",
    tag = "certifications",
    params(("id" = String, Path, description = "Certification id")),
    responses(
        (status = 200, description = "Certification", body = crate::api::schemas::Envelope),
        (status = 400, description = "Missing or malformed id", body = crate::api::schemas::Envelope),
        (status = 404, description = "Certification not found", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/certifications/{id}")]
pub async fn get_single_certification_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let certification_id = match parse_object_id(&path, "Certification") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.certification.get_single.execute(certification_id).await {
        Ok(certification) => {
            ApiResponse::success("Certification retrieved successfully", certification)
        }

        Err(GetSingleCertificationError::NotFound) => {
            ApiResponse::not_found("Certification not found")
        }

        Err(GetSingleCertificationError::QueryError(e)) => {
            error!("Failed to fetch certification {}: {}", certification_id, e);
            ApiResponse::internal_error("Failed to fetch certification")
        }
    }
}
