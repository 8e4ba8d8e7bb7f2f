mod add_skills;
mod get_skills;

pub use add_skills::{add_skills_handler, AddSkillsRequest};
pub use add_skills::__path_add_skills_handler;
pub use get_skills::get_skills_handler;
pub use get_skills::__path_get_skills_handler;
