use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Irreversible. The admin screen asks for explicit confirmation before
/// calling this.
#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError>;
}
