use std::sync::Arc;

use actix_web::web;

use crate::modules::access::application::domain::admin_access_key::AdminAccessKey;
use crate::modules::media::application::media_use_cases::MediaUseCases;
use crate::modules::media::application::ports::incoming::use_cases::IngestImagesUseCase;
use crate::modules::media::application::service::upload_progress_tracker::UploadProgressTracker;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetSingleProjectUseCase, ListProjectsUseCase,
    UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Admin key the route tests authenticate with.
pub const TEST_ADMIN_KEY: &str = "test-admin-key";

pub struct TestAppStateBuilder {
    project: Option<ProjectUseCases>,
    media: Option<MediaUseCases>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: Some(ProjectUseCases {
                list: Arc::new(StubListProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase),
                create: Arc::new(StubCreateProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            }),
            media: Some(MediaUseCases {
                ingest: Arc::new(StubIngestImagesUseCase),
                progress: UploadProgressTracker::new(),
            }),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_projects(
        mut self,
        uc: impl ListProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        let project = self
            .project
            .as_mut()
            .expect("Project use cases must be initialized");

        project.list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        let project = self
            .project
            .as_mut()
            .expect("Project use cases must be initialized");

        project.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        let project = self
            .project
            .as_mut()
            .expect("Project use cases must be initialized");

        project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        let project = self
            .project
            .as_mut()
            .expect("Project use cases must be initialized");

        project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        let project = self
            .project
            .as_mut()
            .expect("Project use cases must be initialized");

        project.delete = Arc::new(uc);
        self
    }

    pub fn with_ingest_images(
        mut self,
        uc: impl IngestImagesUseCase + Send + Sync + 'static,
    ) -> Self {
        let media = self
            .media
            .as_mut()
            .expect("Media use cases must be initialized");

        media.ingest = Arc::new(uc);
        self
    }

    pub fn with_progress_tracker(mut self, tracker: UploadProgressTracker) -> Self {
        let media = self
            .media
            .as_mut()
            .expect("Media use cases must be initialized");

        media.progress = tracker;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project.unwrap(),
            media: self.media.unwrap(),
            admin_access_key: AdminAccessKey::new(TEST_ADMIN_KEY),
        })
    }
}
