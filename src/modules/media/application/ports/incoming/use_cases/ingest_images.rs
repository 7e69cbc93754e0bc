use async_trait::async_trait;

use crate::modules::media::application::domain::entities::{IngestBatch, IngestOutcome};

#[derive(Debug, Clone, thiserror::Error)]
pub enum IngestImagesError {
    /// The upload bucket is missing. Nothing in the batch was or will be
    /// stored; the operator has to fix the bucket configuration.
    #[error("Storage bucket not found")]
    BucketNotFound,

    #[error("Storage error: {0}")]
    StorageUnavailable(String),
}

/// Runs the full pipeline for a batch: validate, recompress, upload,
/// assemble URLs. Files are processed one at a time in request order.
#[async_trait]
pub trait IngestImagesUseCase: Send + Sync {
    async fn execute(&self, batch: IngestBatch) -> Result<IngestOutcome, IngestImagesError>;
}
