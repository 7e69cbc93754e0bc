use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

pub struct GetSingleProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> GetSingleProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> GetSingleProjectUseCase for GetSingleProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ProjectRecord, GetSingleProjectError> {
        self.project_repository.find(id).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => GetSingleProjectError::NotFound,
            ProjectRepositoryError::DatabaseError(msg)
            | ProjectRepositoryError::SerializationError(msg) => {
                GetSingleProjectError::QueryFailed(msg)
            }
        })
    }
}
