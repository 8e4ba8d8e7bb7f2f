use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::skill::application::ports::incoming::use_cases::AddSkillsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct AddSkillsRequest {
    pub skills: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    security(("BearerAuth" = [])),
    request_body = AddSkillsRequest,
    responses(
        (status = 200, description = "Full skill list after the append", body = crate::api::schemas::Envelope),
        (status = 400, description = "Empty skill list", body = crate::api::schemas::Envelope),
        (status = 401, description = "Missing or invalid token", body = crate::api::schemas::Envelope),
        (status = 404, description = "No owner registered", body = crate::api::schemas::Envelope),
    )
)]
#[post("/api/skills")]
pub async fn add_skills_handler(
    _admin: AdminUser,
    req: web::Json<AddSkillsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.add.execute(req.into_inner().skills).await {
        Ok(skills) => {
            info!(count = skills.len(), "Skills added");
            ApiResponse::success("Skills added successfully", skills)
        }
        Err(AddSkillsError::Empty) => ApiResponse::bad_request("Skills cannot be empty"),
        Err(AddSkillsError::OwnerNotFound) => ApiResponse::not_found("User not found"),
        Err(AddSkillsError::RepositoryError(e)) => {
            error!("Failed to update skills: {}", e);
            ApiResponse::internal_error("Failed to update skills")
        }
    }
}
