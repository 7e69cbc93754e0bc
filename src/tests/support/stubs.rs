use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::media::application::domain::entities::{IngestBatch, IngestOutcome};
use crate::modules::media::application::ports::incoming::use_cases::{
    IngestImagesError, IngestImagesUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetSingleProjectError, GetSingleProjectUseCase, ListProjectsError, ListProjectsUseCase,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectDraft, ProjectRecord,
};

#[derive(Default, Clone)]
pub struct StubListProjectsUseCase;

#[async_trait]
impl ListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(
        &self,
        _selected_tags: &[String],
    ) -> Result<Vec<ProjectRecord>, ListProjectsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _id: Uuid) -> Result<ProjectRecord, GetSingleProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _draft: ProjectDraft) -> Result<ProjectRecord, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _draft: ProjectDraft,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubIngestImagesUseCase;

#[async_trait]
impl IngestImagesUseCase for StubIngestImagesUseCase {
    async fn execute(&self, _batch: IngestBatch) -> Result<IngestOutcome, IngestImagesError> {
        unimplemented!("Not used in this test")
    }
}
