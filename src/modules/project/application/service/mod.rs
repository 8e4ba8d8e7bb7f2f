mod create_project_service;
mod get_projects_service;
mod get_single_project_service;
mod remove_project_service;
mod update_project_service;

pub use create_project_service::CreateProjectService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use remove_project_service::RemoveProjectService;
pub use update_project_service::UpdateProjectService;
