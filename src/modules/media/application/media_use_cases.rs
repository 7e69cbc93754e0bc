use std::sync::Arc;

use crate::modules::media::application::ports::incoming::use_cases::IngestImagesUseCase;
use crate::modules::media::application::service::upload_progress_tracker::UploadProgressTracker;

#[derive(Clone)]
pub struct MediaUseCases {
    pub ingest: Arc<dyn IngestImagesUseCase + Send + Sync>,
    /// Shared with the ingest service so the progress endpoint sees the
    /// same board the pipeline writes to.
    pub progress: UploadProgressTracker,
}
