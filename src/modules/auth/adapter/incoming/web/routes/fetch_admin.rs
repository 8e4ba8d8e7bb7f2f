use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::fetch_admin::FetchAdminError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/admin/auth",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Admin profile", body = crate::api::schemas::Envelope),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::Envelope),
        (status = 404, description = "User not found", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/admin/auth")]
pub async fn fetch_admin_handler(user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.fetch.execute(UserId::from(user.user_id)).await {
        Ok(profile) => ApiResponse::success("User profile fetched successfully", profile),

        Err(FetchAdminError::NotFound) => ApiResponse::not_found("User not found"),

        Err(FetchAdminError::QueryError(e)) => {
            error!("Failed to fetch admin profile {}: {}", user.user_id, e);
            ApiResponse::internal_error("Failed to fetch user profile")
        }
    }
}
