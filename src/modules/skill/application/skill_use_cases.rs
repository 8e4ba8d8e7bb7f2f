use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::{
    AddSkillsUseCase, GetSkillsUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub add: Arc<dyn AddSkillsUseCase + Send + Sync>,
    pub get: Arc<dyn GetSkillsUseCase + Send + Sync>,
}
