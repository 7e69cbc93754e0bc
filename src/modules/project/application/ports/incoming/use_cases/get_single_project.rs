use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::ProjectRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Failed to fetch project: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ProjectRecord, GetSingleProjectError>;
}
