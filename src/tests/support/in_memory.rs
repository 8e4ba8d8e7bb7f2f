//! Store-backed ports kept in process memory, wired into real services for
//! end-to-end route tests.

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::helpers::OwnerResolver;
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::{
    admin_auth::AdminAuthUseCase, fetch_admin::FetchAdminUseCase,
};
use crate::modules::certification::application::domain::entities::{
    Certification, CertificationData,
};
use crate::modules::certification::application::ports::outgoing::{
    CertificationQuery, CertificationQueryError, CertificationRepository,
    CertificationRepositoryError,
};
use crate::modules::certification::application::service::{
    CreateCertificationService, GetCertificationsService, GetSingleCertificationService,
    RemoveCertificationService, UpdateCertificationService,
};
use crate::modules::experience::application::domain::entities::{Experience, ExperienceData};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError, ExperienceRepository, ExperienceRepositoryError,
};
use crate::modules::experience::application::service::{
    CreateExperienceService, GetExperiencesService, GetSingleExperienceService,
    RemoveExperienceService, UpdateExperienceService,
};
use crate::modules::project::application::domain::entities::{Project, ProjectData};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::application::service::{
    CreateProjectService, GetProjectsService, GetSingleProjectService, RemoveProjectService,
    UpdateProjectService,
};
use crate::modules::skill::application::service::{AddSkillsService, GetSkillsService};
use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::auth_helper::test_token_provider;
use crate::AppState;

pub const TEST_ADMIN_PASS: &str = "let-me-in";

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    projects: Vec<Project>,
    experiences: Vec<Experience>,
    certifications: Vec<Certification>,
}

/// Rows are kept in insertion order; listings walk them backwards.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn owner_skills(&self) -> Vec<String> {
        let tables = self.tables.lock().unwrap();
        tables
            .users
            .first()
            .map(|u| u.skills.clone())
            .unwrap_or_default()
    }
}

/* --------------------------------------------------
 * Users
 * -------------------------------------------------- */

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_first(&self) -> Result<Option<User>, UserQueryError> {
        Ok(self.tables.lock().unwrap().users.first().cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        // Same rule as the users_single_owner index
        if !tables.users.is_empty() {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: data.id,
            email: data.email,
            password_hash: data.password_hash,
            skills: vec![],
            projects: vec![],
            experiences: vec![],
            certifications: vec![],
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn append_skills(
        &self,
        owner: UserId,
        skills: Vec<String>,
    ) -> Result<Vec<String>, UserRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == owner.value())
            .ok_or(UserRepositoryError::UserNotFound)?;

        user.skills.extend(skills);
        Ok(user.skills.clone())
    }
}

/* --------------------------------------------------
 * Queries
 * -------------------------------------------------- */

#[async_trait]
impl ProjectQuery for InMemoryStore {
    async fn list(&self) -> Result<Vec<Project>, ProjectQueryError> {
        Ok(self.tables.lock().unwrap().projects.iter().rev().cloned().collect())
    }

    async fn get_by_id(&self, project_id: Uuid) -> Result<Option<Project>, ProjectQueryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.projects.iter().find(|p| p.id == project_id).cloned())
    }

    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Project>, ProjectQueryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .projects
            .iter()
            .rev()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ExperienceQuery for InMemoryStore {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceQueryError> {
        Ok(self.tables.lock().unwrap().experiences.iter().rev().cloned().collect())
    }

    async fn get_by_id(
        &self,
        experience_id: Uuid,
    ) -> Result<Option<Experience>, ExperienceQueryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.experiences.iter().find(|e| e.id == experience_id).cloned())
    }
}

#[async_trait]
impl CertificationQuery for InMemoryStore {
    async fn list(&self) -> Result<Vec<Certification>, CertificationQueryError> {
        Ok(self.tables.lock().unwrap().certifications.iter().rev().cloned().collect())
    }

    async fn get_by_id(
        &self,
        certification_id: Uuid,
    ) -> Result<Option<Certification>, CertificationQueryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .certifications
            .iter()
            .find(|c| c.id == certification_id)
            .cloned())
    }
}

/* --------------------------------------------------
 * Repositories
 * -------------------------------------------------- */

/// The three owned collections share one shape: a row table plus a
/// back-reference list on the owner.
macro_rules! owned_repository {
    ($repo:ident, $error:ident, $entity:ident, $data:ident, $table:ident) => {
        #[async_trait]
        impl $repo for InMemoryStore {
            async fn create_for_owner(
                &self,
                owner: UserId,
                data: $data,
            ) -> Result<$entity, $error> {
                let mut tables = self.tables.lock().unwrap();
                let user = tables
                    .users
                    .iter_mut()
                    .find(|u| u.id == owner.value())
                    .ok_or($error::OwnerNotFound)?;

                let now = Utc::now();
                let row = $entity {
                    id: Uuid::new_v4(),
                    data,
                    created_at: now,
                    updated_at: now,
                };
                user.$table.push(row.id);
                tables.$table.push(row.clone());
                Ok(row)
            }

            async fn update(&self, id: Uuid, data: $data) -> Result<(), $error> {
                let mut tables = self.tables.lock().unwrap();
                let row = tables
                    .$table
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or($error::NotFound)?;

                row.data = data;
                row.updated_at = Utc::now();
                Ok(())
            }

            async fn delete_for_owner(&self, owner: UserId, id: Uuid) -> Result<(), $error> {
                let mut tables = self.tables.lock().unwrap();
                let user = tables
                    .users
                    .iter_mut()
                    .find(|u| u.id == owner.value())
                    .ok_or($error::OwnerNotFound)?;

                let position = user
                    .$table
                    .iter()
                    .position(|owned| *owned == id)
                    .ok_or($error::NotFound)?;
                user.$table.remove(position);

                tables.$table.retain(|r| r.id != id);
                Ok(())
            }
        }
    };
}

owned_repository!(ProjectRepository, ProjectRepositoryError, Project, ProjectData, projects);
owned_repository!(
    ExperienceRepository,
    ExperienceRepositoryError,
    Experience,
    ExperienceData,
    experiences
);
owned_repository!(
    CertificationRepository,
    CertificationRepositoryError,
    Certification,
    CertificationData,
    certifications
);

/* --------------------------------------------------
 * Wiring
 * -------------------------------------------------- */

/// Real services over `store`. Stats use cases stay stubbed.
pub fn wired_state(store: &InMemoryStore) -> web::Data<AppState> {
    let owner = OwnerResolver::new(Arc::new(store.clone()), None);
    let hasher = Argon2Hasher::with_params(1024, 1, 1).expect("valid test hashing params");

    TestAppStateBuilder::default()
        .with_admin_auth_use_case(AdminAuthUseCase::new(
            store.clone(),
            store.clone(),
            Arc::new(hasher),
            test_token_provider(),
            owner.clone(),
            TEST_ADMIN_PASS.to_string(),
        ))
        .with_fetch_admin_use_case(FetchAdminUseCase::new(store.clone()))
        .with_get_projects(GetProjectsService::new(store.clone()))
        .with_get_single_project(GetSingleProjectService::new(store.clone()))
        .with_create_project(CreateProjectService::new(store.clone(), owner.clone()))
        .with_update_project(UpdateProjectService::new(store.clone()))
        .with_remove_project(RemoveProjectService::new(store.clone(), owner.clone()))
        .with_get_experiences(GetExperiencesService::new(store.clone()))
        .with_get_single_experience(GetSingleExperienceService::new(store.clone()))
        .with_create_experience(CreateExperienceService::new(store.clone(), owner.clone()))
        .with_update_experience(UpdateExperienceService::new(store.clone()))
        .with_remove_experience(RemoveExperienceService::new(store.clone(), owner.clone()))
        .with_get_certifications(GetCertificationsService::new(store.clone()))
        .with_get_single_certification(GetSingleCertificationService::new(store.clone()))
        .with_create_certification(CreateCertificationService::new(
            store.clone(),
            owner.clone(),
        ))
        .with_update_certification(UpdateCertificationService::new(store.clone()))
        .with_remove_certification(RemoveCertificationService::new(
            store.clone(),
            owner.clone(),
        ))
        .with_add_skills(AddSkillsService::new(store.clone(), owner.clone()))
        .with_get_skills(GetSkillsService::new(store.clone(), store.clone(), owner))
        .build()
}
