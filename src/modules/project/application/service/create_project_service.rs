use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectDraft, ProjectRecord, ProjectRepository, ProjectRepositoryError, MAX_CONTENT_IMAGES,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, draft: ProjectDraft) -> Result<ProjectRecord, CreateProjectError> {
        if draft.content_images.len() > MAX_CONTENT_IMAGES {
            return Err(CreateProjectError::TooManyContentImages {
                max: MAX_CONTENT_IMAGES,
            });
        }

        self.project_repository
            .create(draft)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::DatabaseError(msg)
                | ProjectRepositoryError::SerializationError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
                ProjectRepositoryError::NotFound => CreateProjectError::RepositoryError(
                    "unexpected not found while creating project".to_string(),
                ),
            })
    }
}
