use bytes::Bytes;
use serde::Serialize;

/// One incoming file from the admin upload form.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Which project field the uploaded URLs are destined for. A multi-image
/// field merges with what the project already holds and is capped; a
/// single-image field just takes the fresh upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetField {
    Single,
    Multi,
}

/// Checkpoints reported to the progress poller while a file moves through
/// the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestStage {
    Accepted,
    Compressing,
    Uploading,
    Done,
}

impl IngestStage {
    pub fn percent(self) -> u8 {
        match self {
            IngestStage::Accepted => 10,
            IngestStage::Compressing => 30,
            IngestStage::Uploading => 50,
            IngestStage::Done => 100,
        }
    }
}

/// Non-fatal conditions surfaced to the caller. The batch keeps going
/// past all of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UploadWarning {
    /// File failed type validation and was skipped.
    RejectedFile { file_name: String },
    /// Storage refused this one file; the rest of the batch continued.
    UploadFailed { file_name: String },
    /// Multi-image merge hit the cap; this many trailing entries were cut.
    ImagesDropped { dropped: usize },
}

/// Everything the ingest pipeline needs for one request.
#[derive(Debug, Clone)]
pub struct IngestBatch {
    pub target: TargetField,
    /// URLs the project already holds (multi-image merges against these).
    pub existing: Vec<String>,
    pub files: Vec<SourceImage>,
}

/// What the caller writes back into the project draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestOutcome {
    pub urls: Vec<String>,
    pub warnings: Vec<UploadWarning>,
}
