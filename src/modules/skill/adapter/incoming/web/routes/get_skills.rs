use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsError, ProjectSkills,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    responses(
        (status = 200, description = "Distinct tags across the owner's projects", body = crate::api::schemas::Envelope),
        (status = 404, description = "No owner registered", body = crate::api::schemas::Envelope),
        (status = 500, description = "Store failure", body = crate::api::schemas::Envelope),
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get.execute().await {
        Ok(ProjectSkills::NoProjects) => ApiResponse::empty("No projects found"),
        Ok(ProjectSkills::NoSkills) => ApiResponse::empty("No skills found"),
        Ok(ProjectSkills::Skills(skills)) => {
            ApiResponse::success("Skills retrieved successfully", skills)
        }
        Err(GetSkillsError::OwnerNotFound) => ApiResponse::not_found("User not found"),
        Err(GetSkillsError::QueryError(e)) => {
            error!("Failed to fetch skills: {}", e);
            ApiResponse::internal_error("Failed to fetch skills")
        }
    }
}
