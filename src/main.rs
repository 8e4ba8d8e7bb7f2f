mod api;
mod config;
pub mod health;
pub mod modules;
mod shared;
pub use modules::auth;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::admin_use_cases::AdminUseCases;
use crate::auth::application::helpers::OwnerResolver;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::{
    admin_auth::AdminAuthUseCase, fetch_admin::FetchAdminUseCase,
};
use crate::config::AppConfig;

use crate::modules::certification::adapter::outgoing::{
    CertificationQueryPostgres, CertificationRepositoryPostgres,
};
use crate::modules::certification::application::certification_use_cases::CertificationUseCases;
use crate::modules::certification::application::service::{
    CreateCertificationService, GetCertificationsService, GetSingleCertificationService,
    RemoveCertificationService, UpdateCertificationService,
};
use crate::modules::experience::adapter::outgoing::{
    ExperienceQueryPostgres, ExperienceRepositoryPostgres,
};
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::service::{
    CreateExperienceService, GetExperiencesService, GetSingleExperienceService,
    RemoveExperienceService, UpdateExperienceService,
};
use crate::modules::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateProjectService, GetProjectsService, GetSingleProjectService, RemoveProjectService,
    UpdateProjectService,
};
use crate::modules::skill::application::service::{AddSkillsService, GetSkillsService};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::stats::adapter::outgoing::{
    build_http_client, ContributionsClient, GithubApiClient, LeetCodeClient,
};
use crate::modules::stats::application::service::{
    ExternalStatsRelayService, RepositoryStatsService,
};
use crate::modules::stats::application::stats_use_cases::StatsUseCases;
use crate::shared::api::custom_json_config;

use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub admin: AdminUseCases,
    pub project: ProjectUseCases,
    pub experience: ExperienceUseCases,
    pub certification: CertificationUseCases,
    pub skill: SkillUseCases,
    pub stats: StatsUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},actix_web=info", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(?config, "Starting application...");
    if config.is_production() && config.cors_allow_origins.iter().any(|o| o == "*") {
        warn!("CORS_ALLOW_ORIGINS is \"*\" in production");
    }

    // Database connection
    let mut opt = ConnectOptions::new(config.database.connection_url());
    opt.max_connections(config.database.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.database.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Auth
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let owner_resolver = OwnerResolver::new(Arc::new(user_query.clone()), config.owner_id);

    let jwt_service = JwtTokenService::new(JwtConfig::from_app_config(&config)?);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher = Argon2Hasher::from_settings(&config.hashing)?;

    let admin = AdminUseCases {
        authenticate: Arc::new(AdminAuthUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::new(password_hasher),
            Arc::clone(&token_provider_arc),
            owner_resolver.clone(),
            config.admin_pass.clone(),
        )),
        fetch: Arc::new(FetchAdminUseCase::new(user_query.clone())),
    };

    // Projects
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project = ProjectUseCases {
        get_list: Arc::new(GetProjectsService::new(project_query.clone())),
        get_single: Arc::new(GetSingleProjectService::new(project_query.clone())),
        create: Arc::new(CreateProjectService::new(
            project_repo.clone(),
            owner_resolver.clone(),
        )),
        update: Arc::new(UpdateProjectService::new(project_repo.clone())),
        remove: Arc::new(RemoveProjectService::new(project_repo, owner_resolver.clone())),
    };

    // Experiences
    let experience_query = ExperienceQueryPostgres::new(Arc::clone(&db_arc));
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience = ExperienceUseCases {
        get_list: Arc::new(GetExperiencesService::new(experience_query.clone())),
        get_single: Arc::new(GetSingleExperienceService::new(experience_query)),
        create: Arc::new(CreateExperienceService::new(
            experience_repo.clone(),
            owner_resolver.clone(),
        )),
        update: Arc::new(UpdateExperienceService::new(experience_repo.clone())),
        remove: Arc::new(RemoveExperienceService::new(
            experience_repo,
            owner_resolver.clone(),
        )),
    };

    // Certifications
    let certification_query = CertificationQueryPostgres::new(Arc::clone(&db_arc));
    let certification_repo = CertificationRepositoryPostgres::new(Arc::clone(&db_arc));
    let certification = CertificationUseCases {
        get_list: Arc::new(GetCertificationsService::new(certification_query.clone())),
        get_single: Arc::new(GetSingleCertificationService::new(certification_query)),
        create: Arc::new(CreateCertificationService::new(
            certification_repo.clone(),
            owner_resolver.clone(),
        )),
        update: Arc::new(UpdateCertificationService::new(certification_repo.clone())),
        remove: Arc::new(RemoveCertificationService::new(
            certification_repo,
            owner_resolver.clone(),
        )),
    };

    // Skills
    let skill = SkillUseCases {
        add: Arc::new(AddSkillsService::new(user_repo, owner_resolver.clone())),
        get: Arc::new(GetSkillsService::new(user_query, project_query, owner_resolver)),
    };

    // External stats
    let http_client = build_http_client()?;
    if config.github.token.is_empty() {
        warn!("GITHUB_TOKEN is not set, GitHub calls are unauthenticated and rate limited");
    }
    let github = GithubApiClient::new(http_client.clone(), &config.github);
    let stats = StatsUseCases {
        repositories: Arc::new(RepositoryStatsService::new(github.clone())),
        relay: Arc::new(ExternalStatsRelayService::new(
            github,
            LeetCodeClient::new(http_client.clone(), &config.leetcode),
            ContributionsClient::new(
                http_client,
                &config.contributions_api_url,
                &config.github.username,
            ),
        )),
    };

    let state = AppState {
        admin,
        project,
        experience,
        certification,
        skill,
        stats,
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    let allowed_origins = config.cors_allow_origins.clone();
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .shutdown_timeout(30)
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}

/// "*" in the allow-list opens the API to any origin.
#[cfg(not(tarpaulin_include))]
fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .max_age(86400)
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{certification, experience, project, skill, stats};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Admin
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_auth_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_admin_handler);
    // Projects
    cfg.service(project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(project::adapter::incoming::web::routes::remove_project_handler);
    // Experiences
    cfg.service(experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(experience::adapter::incoming::web::routes::get_single_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::remove_experience_handler);
    // Certifications
    cfg.service(certification::adapter::incoming::web::routes::get_certifications_handler);
    cfg.service(certification::adapter::incoming::web::routes::get_single_certification_handler);
    cfg.service(certification::adapter::incoming::web::routes::create_certification_handler);
    cfg.service(certification::adapter::incoming::web::routes::update_certification_handler);
    cfg.service(certification::adapter::incoming::web::routes::remove_certification_handler);
    // Skills
    cfg.service(skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(skill::adapter::incoming::web::routes::add_skills_handler);
    // Stats. Literal /api/github/* paths go before the bare /api/github profile.
    cfg.service(stats::adapter::incoming::web::routes::commit_histogram_handler);
    cfg.service(stats::adapter::incoming::web::routes::language_totals_handler);
    cfg.service(stats::adapter::incoming::web::routes::star_total_handler);
    cfg.service(stats::adapter::incoming::web::routes::top_repositories_handler);
    cfg.service(stats::adapter::incoming::web::routes::contribution_calendar_handler);
    cfg.service(stats::adapter::incoming::web::routes::github_profile_handler);
    cfg.service(stats::adapter::incoming::web::routes::leetcode_stats_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
