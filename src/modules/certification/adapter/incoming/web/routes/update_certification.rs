use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::certification::application::domain::entities::CertificationData;
use crate::modules::certification::application::ports::incoming::use_cases::UpdateCertificationError;
use crate::shared::api::{parse_object_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/certifications/{id}",
    tag = "certifications",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Certification id")),
    request_body = CertificationData,
    responses(
        (status = 200, description = "Certification updated, input echoed", body = crate::api::schemas::Envelope),
        (status = 400, description = "Malformed id or missing fields", body = crate::api::schemas::Envelope),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::Envelope),
        (status = 404, description = "Certification not found", body = crate::api::schemas::Envelope),
    )
)]
#[put("/api/certifications/{id}")]
pub async fn update_certification_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    req: web::Json<CertificationData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let certification_id = match parse_object_id(&path, "Certification") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.certification.update.execute(certification_id, req.into_inner()).await {
        Ok(updated) => {
            info!(%certification_id, "Certification updated");
            ApiResponse::success("Certification updated successfully", updated)
        }

        Err(UpdateCertificationError::Validation(missing)) => {
            ApiResponse::bad_request(&missing.to_string())
        }

        Err(UpdateCertificationError::NotFound) => {
            ApiResponse::not_found("Certification not found")
        }

        Err(UpdateCertificationError::RepositoryError(e)) => {
            error!("Failed to update certification {}: {}", certification_id, e);
            ApiResponse::internal_error("Failed to update certification")
        }
    }
}
