use crate::api::schemas::Envelope;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::AdminAuthRequest;
use crate::modules::certification::application::domain::entities::CertificationData;
use crate::modules::experience::application::domain::entities::ExperienceData;
use crate::modules::project::application::domain::entities::ProjectData;
use crate::modules::skill::adapter::incoming::web::routes::AddSkillsRequest;
use crate::modules::stats::application::domain::entities::{
    DailyCommits, StarTotal, TopRepository,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content and stats API behind a single-owner portfolio site",
    ),
    paths(
        // Admin
        crate::auth::adapter::incoming::web::routes::admin_auth_handler,
        crate::auth::adapter::incoming::web::routes::fetch_admin_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::remove_project_handler,

        // Experiences
        crate::modules::experience::adapter::incoming::web::routes::get_experiences_handler,
        crate::modules::experience::adapter::incoming::web::routes::get_single_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::create_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::update_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::remove_experience_handler,

        // Certifications
        crate::modules::certification::adapter::incoming::web::routes::get_certifications_handler,
        crate::modules::certification::adapter::incoming::web::routes::get_single_certification_handler,
        crate::modules::certification::adapter::incoming::web::routes::create_certification_handler,
        crate::modules::certification::adapter::incoming::web::routes::update_certification_handler,
        crate::modules::certification::adapter::incoming::web::routes::remove_certification_handler,

        // Skills
        crate::modules::skill::adapter::incoming::web::routes::get_skills_handler,
        crate::modules::skill::adapter::incoming::web::routes::add_skills_handler,

        // Stats
        crate::modules::stats::adapter::incoming::web::routes::github_profile_handler,
        crate::modules::stats::adapter::incoming::web::routes::commit_histogram_handler,
        crate::modules::stats::adapter::incoming::web::routes::language_totals_handler,
        crate::modules::stats::adapter::incoming::web::routes::star_total_handler,
        crate::modules::stats::adapter::incoming::web::routes::top_repositories_handler,
        crate::modules::stats::adapter::incoming::web::routes::contribution_calendar_handler,
        crate::modules::stats::adapter::incoming::web::routes::leetcode_stats_handler,
    ),
    components(
        schemas(
            Envelope,
            AdminAuthRequest,
            ProjectData,
            ExperienceData,
            CertificationData,
            AddSkillsRequest,
            DailyCommits,
            StarTotal,
            TopRepository,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "admin", description = "Owner registration and login"),
        (name = "projects", description = "Project entries"),
        (name = "experiences", description = "Work experience entries"),
        (name = "certifications", description = "Certification entries"),
        (name = "skills", description = "Skill tags"),
        (name = "stats", description = "Read-only relays of third-party stats"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by POST /api/admin/auth"))
                        .build(),
                ),
            )
        }
    }
}
