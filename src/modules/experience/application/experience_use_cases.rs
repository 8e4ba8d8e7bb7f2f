use std::sync::Arc;

use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, GetExperiencesUseCase, GetSingleExperienceUseCase,
    RemoveExperienceUseCase, UpdateExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub get_list: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleExperienceUseCase + Send + Sync>,
    pub create: Arc<dyn CreateExperienceUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveExperienceUseCase + Send + Sync>,
}
