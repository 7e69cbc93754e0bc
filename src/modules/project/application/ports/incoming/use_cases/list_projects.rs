use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_repository::ProjectRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectsError {
    #[error("Failed to list projects: {0}")]
    QueryFailed(String),
}

/// Public gallery listing. `selected_tags` narrows the set conjunctively;
/// an empty selection returns everything, newest first.
#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        selected_tags: &[String],
    ) -> Result<Vec<ProjectRecord>, ListProjectsError>;
}
