mod add_skills_service;
mod get_skills_service;

pub use add_skills_service::AddSkillsService;
pub use get_skills_service::GetSkillsService;
