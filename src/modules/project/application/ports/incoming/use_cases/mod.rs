mod create_project;
mod get_projects;
mod get_single_project;
mod remove_project;
mod update_project;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use remove_project::{RemoveProjectError, RemoveProjectUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
