use std::sync::Arc;

use actix_web::web;

use crate::auth::application::admin_use_cases::AdminUseCases;
use crate::auth::application::use_cases::{
    admin_auth::IAdminAuthUseCase, fetch_admin::IFetchAdminUseCase,
};
use crate::modules::certification::application::certification_use_cases::CertificationUseCases;
use crate::modules::certification::application::ports::incoming::use_cases::{
    CreateCertificationUseCase, GetCertificationsUseCase, GetSingleCertificationUseCase,
    RemoveCertificationUseCase, UpdateCertificationUseCase,
};
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, GetExperiencesUseCase, GetSingleExperienceUseCase,
    RemoveExperienceUseCase, UpdateExperienceUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase, RemoveProjectUseCase,
    UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::{
    AddSkillsUseCase, GetSkillsUseCase,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::stats::application::ports::incoming::use_cases::{
    FetchRepositoryStatsUseCase, RelayExternalStatsUseCase,
};
use crate::modules::stats::application::stats_use_cases::StatsUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case panics unless replaced.
pub struct TestAppStateBuilder {
    admin: AdminUseCases,
    project: ProjectUseCases,
    experience: ExperienceUseCases,
    certification: CertificationUseCases,
    skill: SkillUseCases,
    stats: StatsUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            admin: AdminUseCases {
                authenticate: Arc::new(StubAdminAuthUseCase),
                fetch: Arc::new(StubFetchAdminUseCase),
            },
            project: ProjectUseCases {
                get_list: Arc::new(StubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase),
                create: Arc::new(StubCreateProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                remove: Arc::new(StubRemoveProjectUseCase),
            },
            experience: ExperienceUseCases {
                get_list: Arc::new(StubGetExperiencesUseCase),
                get_single: Arc::new(StubGetSingleExperienceUseCase),
                create: Arc::new(StubCreateExperienceUseCase),
                update: Arc::new(StubUpdateExperienceUseCase),
                remove: Arc::new(StubRemoveExperienceUseCase),
            },
            certification: CertificationUseCases {
                get_list: Arc::new(StubGetCertificationsUseCase),
                get_single: Arc::new(StubGetSingleCertificationUseCase),
                create: Arc::new(StubCreateCertificationUseCase),
                update: Arc::new(StubUpdateCertificationUseCase),
                remove: Arc::new(StubRemoveCertificationUseCase),
            },
            skill: SkillUseCases {
                add: Arc::new(StubAddSkillsUseCase),
                get: Arc::new(StubGetSkillsUseCase),
            },
            stats: StatsUseCases {
                repositories: Arc::new(StubRepositoryStatsUseCase),
                relay: Arc::new(StubStatsRelayUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Admin
    pub fn with_admin_auth_use_case(
        mut self,
        uc: impl IAdminAuthUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin.authenticate = Arc::new(uc);
        self
    }

    pub fn with_fetch_admin_use_case(
        mut self,
        uc: impl IFetchAdminUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin.fetch = Arc::new(uc);
        self
    }

    // Projects
    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_remove_project(
        mut self,
        uc: impl RemoveProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.remove = Arc::new(uc);
        self
    }

    // Experiences
    pub fn with_get_experiences(
        mut self,
        uc: impl GetExperiencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_experience(
        mut self,
        uc: impl GetSingleExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_experience(
        mut self,
        uc: impl CreateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.create = Arc::new(uc);
        self
    }

    pub fn with_update_experience(
        mut self,
        uc: impl UpdateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.update = Arc::new(uc);
        self
    }

    pub fn with_remove_experience(
        mut self,
        uc: impl RemoveExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.remove = Arc::new(uc);
        self
    }

    // Certifications
    pub fn with_get_certifications(
        mut self,
        uc: impl GetCertificationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.certification.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_certification(
        mut self,
        uc: impl GetSingleCertificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.certification.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_certification(
        mut self,
        uc: impl CreateCertificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.certification.create = Arc::new(uc);
        self
    }

    pub fn with_update_certification(
        mut self,
        uc: impl UpdateCertificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.certification.update = Arc::new(uc);
        self
    }

    pub fn with_remove_certification(
        mut self,
        uc: impl RemoveCertificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.certification.remove = Arc::new(uc);
        self
    }

    // Skills
    pub fn with_add_skills(mut self, uc: impl AddSkillsUseCase + Send + Sync + 'static) -> Self {
        self.skill.add = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.skill.get = Arc::new(uc);
        self
    }

    // Stats
    pub fn with_repository_stats(
        mut self,
        uc: impl FetchRepositoryStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.stats.repositories = Arc::new(uc);
        self
    }

    pub fn with_stats_relay(
        mut self,
        uc: impl RelayExternalStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.stats.relay = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            admin: self.admin,
            project: self.project,
            experience: self.experience,
            certification: self.certification,
            skill: self.skill,
            stats: self.stats,
        })
    }
}
