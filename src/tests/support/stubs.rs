use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::helpers::OwnerResolver;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::auth::application::use_cases::admin_auth::{
    AdminAuthError, AdminAuthResponse, AdminCredentials, IAdminAuthUseCase,
};
use crate::auth::application::use_cases::fetch_admin::{FetchAdminError, IFetchAdminUseCase};
use crate::modules::certification::application::domain::entities::{
    Certification, CertificationData,
};
use crate::modules::certification::application::ports::incoming::use_cases::{
    CreateCertificationError, CreateCertificationUseCase, GetCertificationsError,
    GetCertificationsUseCase, GetSingleCertificationError, GetSingleCertificationUseCase,
    RemoveCertificationError, RemoveCertificationUseCase, UpdateCertificationError,
    UpdateCertificationUseCase,
};
use crate::modules::experience::application::domain::entities::{Experience, ExperienceData};
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceError, CreateExperienceUseCase, GetExperiencesError, GetExperiencesUseCase,
    GetSingleExperienceError, GetSingleExperienceUseCase, RemoveExperienceError,
    RemoveExperienceUseCase, UpdateExperienceError, UpdateExperienceUseCase,
};
use crate::modules::project::application::domain::entities::{Project, ProjectData};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, GetProjectsError, GetProjectsUseCase,
    GetSingleProjectError, GetSingleProjectUseCase, RemoveProjectError, RemoveProjectUseCase,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::skill::application::ports::incoming::use_cases::{
    AddSkillsError, AddSkillsUseCase, GetSkillsError, GetSkillsUseCase, ProjectSkills,
};
use crate::modules::stats::application::domain::entities::{
    DailyCommits, StarTotal, TopRepository,
};
use crate::modules::stats::application::ports::incoming::use_cases::{
    FetchRepositoryStatsError, FetchRepositoryStatsUseCase, RelayExternalStatsError,
    RelayExternalStatsUseCase,
};

/* --------------------------------------------------
 * Owner resolution
 * -------------------------------------------------- */

/// User query with no users at all.
#[derive(Default, Clone)]
pub struct EmptyUserQuery;

#[async_trait]
impl UserQuery for EmptyUserQuery {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(None)
    }

    async fn find_first(&self) -> Result<Option<User>, UserQueryError> {
        Ok(None)
    }
}

/// Resolver pinned to `owner` without touching any store.
pub fn fixed_owner(owner: Uuid) -> OwnerResolver {
    OwnerResolver::new(Arc::new(EmptyUserQuery), Some(owner))
}

/// Resolver for a fresh install where nobody has registered yet.
pub fn no_owner() -> OwnerResolver {
    OwnerResolver::new(Arc::new(EmptyUserQuery), None)
}

/* --------------------------------------------------
 * Admin
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubAdminAuthUseCase;

#[async_trait]
impl IAdminAuthUseCase for StubAdminAuthUseCase {
    async fn execute(
        &self,
        _credentials: AdminCredentials,
    ) -> Result<AdminAuthResponse, AdminAuthError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchAdminUseCase;

#[async_trait]
impl IFetchAdminUseCase for StubFetchAdminUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<User, FetchAdminError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Projects
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<Project, GetSingleProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _data: ProjectData) -> Result<Project, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _data: ProjectData,
    ) -> Result<ProjectData, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRemoveProjectUseCase;

#[async_trait]
impl RemoveProjectUseCase for StubRemoveProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<(), RemoveProjectError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Experiences
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubGetExperiencesUseCase;

#[async_trait]
impl GetExperiencesUseCase for StubGetExperiencesUseCase {
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleExperienceUseCase;

#[async_trait]
impl GetSingleExperienceUseCase for StubGetSingleExperienceUseCase {
    async fn execute(&self, _experience_id: Uuid) -> Result<Experience, GetSingleExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateExperienceUseCase;

#[async_trait]
impl CreateExperienceUseCase for StubCreateExperienceUseCase {
    async fn execute(&self, _data: ExperienceData) -> Result<Experience, CreateExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateExperienceUseCase;

#[async_trait]
impl UpdateExperienceUseCase for StubUpdateExperienceUseCase {
    async fn execute(
        &self,
        _experience_id: Uuid,
        _data: ExperienceData,
    ) -> Result<ExperienceData, UpdateExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRemoveExperienceUseCase;

#[async_trait]
impl RemoveExperienceUseCase for StubRemoveExperienceUseCase {
    async fn execute(&self, _experience_id: Uuid) -> Result<(), RemoveExperienceError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Certifications
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubGetCertificationsUseCase;

#[async_trait]
impl GetCertificationsUseCase for StubGetCertificationsUseCase {
    async fn execute(&self) -> Result<Vec<Certification>, GetCertificationsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleCertificationUseCase;

#[async_trait]
impl GetSingleCertificationUseCase for StubGetSingleCertificationUseCase {
    async fn execute(
        &self,
        _certification_id: Uuid,
    ) -> Result<Certification, GetSingleCertificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCertificationUseCase;

#[async_trait]
impl CreateCertificationUseCase for StubCreateCertificationUseCase {
    async fn execute(
        &self,
        _data: CertificationData,
    ) -> Result<Certification, CreateCertificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateCertificationUseCase;

#[async_trait]
impl UpdateCertificationUseCase for StubUpdateCertificationUseCase {
    async fn execute(
        &self,
        _certification_id: Uuid,
        _data: CertificationData,
    ) -> Result<CertificationData, UpdateCertificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRemoveCertificationUseCase;

#[async_trait]
impl RemoveCertificationUseCase for StubRemoveCertificationUseCase {
    async fn execute(&self, _certification_id: Uuid) -> Result<(), RemoveCertificationError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Skills
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubAddSkillsUseCase;

#[async_trait]
impl AddSkillsUseCase for StubAddSkillsUseCase {
    async fn execute(&self, _skills: Vec<String>) -> Result<Vec<String>, AddSkillsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSkillsUseCase;

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> Result<ProjectSkills, GetSkillsError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Stats
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubRepositoryStatsUseCase;

#[async_trait]
impl FetchRepositoryStatsUseCase for StubRepositoryStatsUseCase {
    async fn commit_histogram(&self) -> Result<Vec<DailyCommits>, FetchRepositoryStatsError> {
        unimplemented!("Not used in this test")
    }

    async fn language_totals(&self) -> Result<BTreeMap<String, u64>, FetchRepositoryStatsError> {
        unimplemented!("Not used in this test")
    }

    async fn star_total(&self) -> Result<StarTotal, FetchRepositoryStatsError> {
        unimplemented!("Not used in this test")
    }

    async fn top_repositories(&self) -> Result<Vec<TopRepository>, FetchRepositoryStatsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubStatsRelayUseCase;

#[async_trait]
impl RelayExternalStatsUseCase for StubStatsRelayUseCase {
    async fn code_host_profile(&self) -> Result<Value, RelayExternalStatsError> {
        unimplemented!("Not used in this test")
    }

    async fn practice_stats(&self) -> Result<Value, RelayExternalStatsError> {
        unimplemented!("Not used in this test")
    }

    async fn contribution_calendar(&self) -> Result<Value, RelayExternalStatsError> {
        unimplemented!("Not used in this test")
    }
}
