use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectDraft, ProjectRecord,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("A project can hold at most {max} content images")]
    TooManyContentImages { max: usize },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, draft: ProjectDraft) -> Result<ProjectRecord, CreateProjectError>;
}
