use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::certification::application::ports::incoming::use_cases::RemoveCertificationError;
use crate::shared::api::{parse_object_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/certifications/{id}",
    tag = "certifications",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Certification id")),
    responses(
        (status = 200, description = "Certification removed", body = crate::api::schemas::Envelope),
        (status = 400, description = "Missing or malformed id", body = crate::api::schemas::Envelope),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::Envelope),
        (status = 404, description = "Owner or certification not found", body = crate::api::schemas::Envelope),
    )
)]
#[delete("/api/certifications/{id}")]
pub async fn remove_certification_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let certification_id = match parse_object_id(&path, "Certification") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.certification.remove.execute(certification_id).await {
        Ok(()) => {
            info!(%certification_id, "Certification removed");
            ApiResponse::empty("Certification removed successfully")
        }

        Err(RemoveCertificationError::OwnerNotFound) => ApiResponse::not_found("User not found"),

        Err(RemoveCertificationError::NotFound) => {
            ApiResponse::not_found("Certification not found")
        }

        Err(RemoveCertificationError::RepositoryError(e)) => {
            error!("Failed to remove certification {}: {}", certification_id, e);
            ApiResponse::internal_error("Failed to remove certification")
        }
    }
}
