mod create_experience;
mod get_experiences;
mod get_single_experience;
mod remove_experience;
mod update_experience;

pub use create_experience::create_experience_handler;
pub use create_experience::__path_create_experience_handler;
pub use get_experiences::get_experiences_handler;
pub use get_experiences::__path_get_experiences_handler;
pub use get_single_experience::get_single_experience_handler;
pub use get_single_experience::__path_get_single_experience_handler;
pub use remove_experience::remove_experience_handler;
pub use remove_experience::__path_remove_experience_handler;
pub use update_experience::update_experience_handler;
pub use update_experience::__path_update_experience_handler;
