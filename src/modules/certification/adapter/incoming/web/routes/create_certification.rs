use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::certification::application::domain::entities::CertificationData;
use crate::modules::certification::application::ports::incoming::use_cases::CreateCertificationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/certifications",
    tag = "certifications",
    security(("BearerAuth" = [])),
    request_body = CertificationData,
    responses(
        (status = 201, description = "Certification added", body = crate::api::schemas::Envelope),
        (status = 400, description = "Missing required fields", body = crate::api::schemas::Envelope),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::Envelope),
        (status = 404, description = "No owner registered", body = crate::api::schemas::Envelope),
    )
)]
#[post("/api/certifications")]
pub async fn create_certification_handler(
    _admin: AdminUser,
    req: web::Json<CertificationData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certification.create.execute(req.into_inner()).await {
        Ok(certification) => {
            info!(certification_id = %certification.id, "Certification added");
            ApiResponse::created("Certification added successfully", certification)
        }

        Err(CreateCertificationError::Validation(missing)) => {
            ApiResponse::bad_request(&missing.to_string())
        }

        Err(CreateCertificationError::OwnerNotFound) => ApiResponse::not_found("User not found"),

        Err(CreateCertificationError::RepositoryError(e)) => {
            error!("Failed to add certification: {}", e);
            ApiResponse::internal_error("Failed to add certification")
        }
    }
}
