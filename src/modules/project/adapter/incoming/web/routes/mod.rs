mod create_project;
mod get_projects;
mod get_single_project;
mod remove_project;
mod update_project;

pub use create_project::create_project_handler;
pub use create_project::__path_create_project_handler;
pub use get_projects::get_projects_handler;
pub use get_projects::__path_get_projects_handler;
pub use get_single_project::get_single_project_handler;
pub use get_single_project::__path_get_single_project_handler;
pub use remove_project::remove_project_handler;
pub use remove_project::__path_remove_project_handler;
pub use update_project::update_project_handler;
pub use update_project::__path_update_project_handler;
