use async_trait::async_trait;

use crate::modules::project::application::domain::tag_filter::filter_by_tags;
use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ListProjectsService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> ListProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> ListProjectsUseCase for ListProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        selected_tags: &[String],
    ) -> Result<Vec<ProjectRecord>, ListProjectsError> {
        let projects = self.project_repository.list().await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => {
                ListProjectsError::QueryFailed("unexpected not found while listing".to_string())
            }
            ProjectRepositoryError::DatabaseError(msg)
            | ProjectRepositoryError::SerializationError(msg) => {
                ListProjectsError::QueryFailed(msg)
            }
        })?;

        Ok(filter_by_tags(projects, selected_tags))
    }
}
