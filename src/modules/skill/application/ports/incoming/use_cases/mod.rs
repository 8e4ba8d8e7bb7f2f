mod add_skills;
mod get_skills;

pub use add_skills::{AddSkillsError, AddSkillsUseCase};
pub use get_skills::{GetSkillsError, GetSkillsUseCase, ProjectSkills};
