use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectDraft, ProjectRecord,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("A project can hold at most {max} content images")]
    TooManyContentImages { max: usize },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectRecord, UpdateProjectError>;
}
