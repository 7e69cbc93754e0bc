use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ObjectStorageError {
    /// The configured bucket does not exist. Fatal for the whole batch;
    /// retrying the next file cannot succeed either.
    #[error("Storage bucket not found")]
    BucketNotFound,

    /// This one object failed; other objects may still go through.
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Storage infrastructure error: {0}")]
    Infrastructure(String),
}

/// Write access to the public image bucket.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put_object(
        &self,
        object_name: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), ObjectStorageError>;

    /// Public HTTPS URL the frontend embeds directly.
    fn public_url(&self, object_name: &str) -> String;
}
