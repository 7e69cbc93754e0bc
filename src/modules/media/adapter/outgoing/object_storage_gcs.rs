use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::modules::media::application::ports::outgoing::object_storage::{
    ObjectStorage, ObjectStorageError,
};

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
///
/// Keeping this here makes it hard to accidentally pass a raw bucket name.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn public_object_url(bucket: &str, object_name: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, object_name)
}

fn map_upload_error(msg: &str) -> ObjectStorageError {
    let m = msg.to_lowercase();

    if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        ObjectStorageError::BucketNotFound
    } else if m.contains("credential")
        || m.contains("authentication")
        || m.contains("unauthenticated")
    {
        ObjectStorageError::Infrastructure(msg.to_string())
    } else {
        ObjectStorageError::UploadFailed(msg.to_string())
    }
}

/// Internal seam to make the adapter testable without mocking
/// google-cloud-storage types/streams.
///
/// Tests will implement this trait with a fake client.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), String> {
        self.0
            .write_object(bucket_resource, object_name, data, content_type)
            .await
    }
}

/// Production adapter: implements the ObjectStorage port against GCS.
#[derive(Clone)]
pub struct GcsObjectStorage {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket_name: String,
}

impl GcsObjectStorage {
    /// Synchronous constructor - client is initialized lazily on first use.
    pub fn new(bucket_name: String) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket_name,
        }
    }

    /// Get or initialize the GCS client.
    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    /// Test-friendly constructor with pre-initialized client.
    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket_name: String) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket_name,
        }
    }
}

#[async_trait]
impl ObjectStorage for GcsObjectStorage {
    async fn put_object(
        &self,
        object_name: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| ObjectStorageError::Infrastructure(e.to_string()))?;

        let bucket = bucket_resource(&self.bucket_name);

        client
            .write_object(&bucket, object_name, data, content_type)
            .await
            .map_err(|e| map_upload_error(&e))
    }

    fn public_url(&self, object_name: &str) -> String {
        public_object_url(&self.bucket_name, object_name)
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        tracing::info!("GCS storage client created");

        Ok(Self { storage })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        data: Bytes,
        _content_type: &str,
    ) -> Result<(), String> {
        // The service stores objects with extensions GCS infers types
        // from, so the declared content type is not forwarded here.
        self.storage
            .write_object(bucket_resource.to_string(), object_name.to_string(), data)
            .send_unbuffered()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
