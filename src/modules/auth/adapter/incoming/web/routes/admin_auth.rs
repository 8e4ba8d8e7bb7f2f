use actix_web::{http::StatusCode, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::use_cases::admin_auth::{
    AdminAuthError, AdminAuthOutcome, AdminCredentials,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Deserialize, Serialize, ToSchema)]
pub struct AdminAuthRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub admin_pass: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/admin/auth",
    tag = "admin",
    request_body = AdminAuthRequest,
    responses(
        (status = 201, description = "Admin registered", body = crate::api::schemas::Envelope),
        (status = 202, description = "Admin authenticated", body = crate::api::schemas::Envelope),
        (status = 400, description = "Missing or malformed credentials", body = crate::api::schemas::Envelope),
        (status = 401, description = "Invalid admin password or credentials", body = crate::api::schemas::Envelope),
    )
)]
#[post("/api/admin/auth")]
pub async fn admin_auth_handler(
    req: web::Json<AdminAuthRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let credentials = AdminCredentials {
        email: req.email,
        password: req.password,
        admin_pass: req.admin_pass,
    };

    match data.admin.authenticate.execute(credentials).await {
        Ok(response) => {
            let (status, message) = match response.outcome {
                AdminAuthOutcome::Registered => {
                    info!(user_id = %response.user.id, "Admin registered");
                    (StatusCode::CREATED, "Admin registered successfully")
                }
                AdminAuthOutcome::Authenticated => {
                    info!(user_id = %response.user.id, "Admin authenticated");
                    (StatusCode::ACCEPTED, "User already exists")
                }
            };

            ApiResponse::with_token(status, message, response.user, response.token)
        }

        Err(AdminAuthError::InvalidAdminPass) => {
            warn!("Admin auth rejected: wrong admin passphrase");
            ApiResponse::unauthorized("Invalid admin password")
        }

        Err(AdminAuthError::MissingCredentials) => {
            ApiResponse::bad_request("email and password are required")
        }

        Err(AdminAuthError::InvalidEmailFormat) => ApiResponse::bad_request("Invalid email format"),

        Err(AdminAuthError::InvalidCredentials) => {
            warn!("Admin auth rejected: invalid credentials");
            ApiResponse::unauthorized("Invalid email or password")
        }

        Err(e @ AdminAuthError::HashingFailed(_))
        | Err(e @ AdminAuthError::TokenGenerationFailed(_))
        | Err(e @ AdminAuthError::RepositoryError(_)) => {
            error!("Admin auth failed: {}", e);
            ApiResponse::internal_error("Failed to register admin")
        }
    }
}
