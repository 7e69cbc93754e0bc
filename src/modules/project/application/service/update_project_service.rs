use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectDraft, ProjectRecord, ProjectRepository, ProjectRepositoryError, MAX_CONTENT_IMAGES,
};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        if draft.content_images.len() > MAX_CONTENT_IMAGES {
            return Err(UpdateProjectError::TooManyContentImages {
                max: MAX_CONTENT_IMAGES,
            });
        }

        self.project_repository
            .update(id, draft)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    UpdateProjectError::RepositoryError(msg)
                }
            })
    }
}
