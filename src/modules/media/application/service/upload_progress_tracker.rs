use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::media::application::domain::entities::IngestStage;

/// How long a finished entry stays visible to the poller before it is
/// dropped. Long enough for one more poll cycle to observe 100%.
const DONE_RETENTION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Serialize)]
pub struct FileProgress {
    pub id: Uuid,
    pub file_name: String,
    pub stage: IngestStage,
    pub percent: u8,
}

/// In-memory progress board shared between the upload pipeline and the
/// progress endpoint. Single-process state; restarts forget in-flight
/// uploads, which is acceptable for an admin tool.
#[derive(Clone)]
pub struct UploadProgressTracker {
    entries: Arc<RwLock<HashMap<Uuid, FileProgress>>>,
    retention: Duration,
}

impl Default for UploadProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadProgressTracker {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            retention: DONE_RETENTION,
        }
    }

    #[cfg(test)]
    pub fn with_retention(retention: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            retention,
        }
    }

    pub async fn begin(&self, file_name: &str) -> Uuid {
        let id = Uuid::new_v4();
        let entry = FileProgress {
            id,
            file_name: file_name.to_string(),
            stage: IngestStage::Accepted,
            percent: IngestStage::Accepted.percent(),
        };
        self.entries.write().await.insert(id, entry);
        id
    }

    pub async fn set_stage(&self, id: Uuid, stage: IngestStage) {
        if let Some(entry) = self.entries.write().await.get_mut(&id) {
            entry.stage = stage;
            entry.percent = stage.percent();
        }
    }

    /// Mark done and schedule removal after the retention window.
    pub async fn complete(&self, id: Uuid) {
        self.set_stage(id, IngestStage::Done).await;

        let entries = Arc::clone(&self.entries);
        let retention = self.retention;
        tokio::spawn(async move {
            tokio::time::sleep(retention).await;
            entries.write().await.remove(&id);
        });
    }

    /// Drop an entry immediately, for files that never reach done.
    pub async fn abandon(&self, id: Uuid) {
        self.entries.write().await.remove(&id);
    }

    pub async fn snapshot(&self) -> Vec<FileProgress> {
        let mut entries: Vec<FileProgress> =
            self.entries.read().await.values().cloned().collect();
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        entries
    }
}
