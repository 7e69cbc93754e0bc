use async_trait::async_trait;
use bytes::Bytes;
use rand::Rng;
use tracing::{error, warn};

use crate::modules::media::application::domain::entities::{
    IngestBatch, IngestOutcome, IngestStage, SourceImage, TargetField, UploadWarning,
};
use crate::modules::media::application::domain::policies::upload_policy::{
    extension_of, UploadPolicy,
};
use crate::modules::media::application::domain::recompress::recompress_to_jpeg;
use crate::modules::media::application::ports::incoming::use_cases::{
    IngestImagesError, IngestImagesUseCase,
};
use crate::modules::media::application::ports::outgoing::object_storage::{
    ObjectStorage, ObjectStorageError,
};
use crate::modules::media::application::service::upload_progress_tracker::UploadProgressTracker;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct IngestImagesService<S>
where
    S: ObjectStorage,
{
    storage: S,
    policy: UploadPolicy,
    progress: UploadProgressTracker,
}

impl<S> IngestImagesService<S>
where
    S: ObjectStorage,
{
    pub fn new(storage: S, policy: UploadPolicy, progress: UploadProgressTracker) -> Self {
        Self {
            storage,
            policy,
            progress,
        }
    }

    /// Process one accepted file: recompress unless it is a gif, then
    /// upload under a fresh object name. Returns the public URL, or a
    /// warning for a per-file upload failure.
    async fn ingest_one(&self, file: SourceImage) -> Result<Result<String, UploadWarning>, IngestImagesError> {
        let id = self.progress.begin(&file.file_name).await;

        let (out_name, out_bytes, content_type) = if is_gif(&file) {
            // Gifs keep their animation; recompressing would flatten it.
            let ct = "image/gif".to_string();
            (file.file_name.clone(), file.bytes.clone(), ct)
        } else {
            self.progress.set_stage(id, IngestStage::Compressing).await;

            let original_name = file.file_name.clone();
            let original_bytes = file.bytes.clone();
            let recompressed = tokio::task::spawn_blocking(move || {
                recompress_to_jpeg(&original_name, &original_bytes)
            })
            .await;

            match recompressed {
                Ok(Ok(done)) => (done.file_name, Bytes::from(done.bytes), "image/jpeg".to_string()),
                Ok(Err(msg)) => {
                    // Undecodable input (heic, corrupt file). Ship the
                    // original bytes untouched rather than losing the upload.
                    warn!(file_name = %file.file_name, error = %msg, "Recompression failed, uploading original");
                    let ct = fallback_content_type(&file);
                    (file.file_name.clone(), file.bytes.clone(), ct)
                }
                Err(e) => {
                    warn!(file_name = %file.file_name, error = %e, "Recompression task panicked, uploading original");
                    let ct = fallback_content_type(&file);
                    (file.file_name.clone(), file.bytes.clone(), ct)
                }
            }
        };

        self.progress.set_stage(id, IngestStage::Uploading).await;

        let object_name = object_name_for(&out_name);

        match self
            .storage
            .put_object(&object_name, out_bytes, &content_type)
            .await
        {
            Ok(()) => {
                self.progress.complete(id).await;
                Ok(Ok(self.storage.public_url(&object_name)))
            }
            Err(ObjectStorageError::BucketNotFound) => {
                self.progress.abandon(id).await;
                Err(IngestImagesError::BucketNotFound)
            }
            Err(ObjectStorageError::Infrastructure(msg)) => {
                self.progress.abandon(id).await;
                Err(IngestImagesError::StorageUnavailable(msg))
            }
            Err(ObjectStorageError::UploadFailed(msg)) => {
                error!(file_name = %file.file_name, error = %msg, "Upload failed");
                self.progress.abandon(id).await;
                Ok(Err(UploadWarning::UploadFailed {
                    file_name: file.file_name,
                }))
            }
        }
    }
}

#[async_trait]
impl<S> IngestImagesUseCase for IngestImagesService<S>
where
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self, batch: IngestBatch) -> Result<IngestOutcome, IngestImagesError> {
        let mut uploaded: Vec<String> = Vec::new();
        let mut warnings: Vec<UploadWarning> = Vec::new();

        // One file at a time. Admin batches are small and sequential order
        // keeps the progress board readable.
        for file in batch.files {
            if !self.policy.allows(&file.file_name, file.content_type.as_deref()) {
                warnings.push(UploadWarning::RejectedFile {
                    file_name: file.file_name,
                });
                continue;
            }

            match self.ingest_one(file).await? {
                Ok(url) => uploaded.push(url),
                Err(warning) => warnings.push(warning),
            }
        }

        let urls = match batch.target {
            TargetField::Single => uploaded,
            TargetField::Multi => {
                let mut merged = batch.existing;
                merged.extend(uploaded);

                if merged.len() > self.policy.max_multi_images {
                    let dropped = merged.len() - self.policy.max_multi_images;
                    merged.truncate(self.policy.max_multi_images);
                    warnings.push(UploadWarning::ImagesDropped { dropped });
                }

                merged
            }
        };

        Ok(IngestOutcome { urls, warnings })
    }
}

//
// ──────────────────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────────────────
//

fn is_gif(file: &SourceImage) -> bool {
    if let Some(ext) = extension_of(&file.file_name) {
        if ext == "gif" {
            return true;
        }
    }

    file.content_type
        .as_deref()
        .map(|ct| ct.eq_ignore_ascii_case("image/gif"))
        .unwrap_or(false)
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const OBJECT_TOKEN_LEN: usize = 8;

fn random_object_token() -> String {
    let mut rng = rand::thread_rng();
    (0..OBJECT_TOKEN_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Fresh object name: random token plus the processed file's extension.
/// Uploads never collide with or overwrite each other this way.
fn object_name_for(file_name: &str) -> String {
    let token = random_object_token();
    match extension_of(file_name) {
        Some(ext) => format!("{token}.{ext}"),
        None => token,
    }
}

fn fallback_content_type(file: &SourceImage) -> String {
    if let Some(ct) = &file.content_type {
        return ct.clone();
    }

    match extension_of(&file.file_name).as_deref() {
        Some("png") => "image/png".to_string(),
        Some("jpg") | Some("jpeg") => "image/jpeg".to_string(),
        Some("gif") => "image/gif".to_string(),
        Some("heic") => "image/heic".to_string(),
        _ => "application/octet-stream".to_string(),
    }
}
