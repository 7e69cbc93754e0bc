pub mod create_project;
pub mod delete_project;
pub mod get_public_projects;
pub mod get_public_single_project;
pub mod update_project;
