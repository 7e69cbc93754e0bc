pub mod create_project;
pub mod delete_project;
pub mod get_single_project;
pub mod list_projects;
pub mod update_project;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use list_projects::{ListProjectsError, ListProjectsUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
