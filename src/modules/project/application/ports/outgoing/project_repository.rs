// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    CardSize, GalleryItem, ProjectStat,
};

/// Hard cap on the content image list. Ingestion truncates beyond this and
/// the write path rejects drafts that exceed it.
pub const MAX_CONTENT_IMAGES: usize = 10;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Application shape of a portfolio entry. Serialized camelCase at the API
/// boundary; the storage row shape (snake_case, flattened) is the adapter's
/// concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub tools: Vec<String>,
    pub image: String,
    pub content_images: Vec<String>,
    pub size: CardSize,
    pub link: String,
    pub video_url: Option<String>,
    pub full_content: Option<String>,
    pub gallery: Vec<GalleryItem>,
    pub stats: Vec<ProjectStat>,
    pub created_at: DateTime<Utc>,
}

/// Unsaved edit held by the admin screen. Identity and creation time belong
/// to the store; everything else is the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub content_images: Vec<String>,
    #[serde(default)]
    pub size: CardSize,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub full_content: Option<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub stats: Vec<ProjectStat>,
}

impl ProjectDraft {
    /// Empty draft the editor starts a "new project" flow with.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            tags: Vec::new(),
            tools: Vec::new(),
            image: String::new(),
            content_images: Vec::new(),
            size: CardSize::default(),
            link: String::new(),
            video_url: None,
            full_content: None,
            gallery: Vec::new(),
            stats: Vec::new(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// CRUD access to project rows. The remote store is the sole source of
/// truth; callers refetch after every successful mutation instead of
/// patching local state.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All records, newest first (created_at descending).
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError>;

    async fn find(&self, id: Uuid) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn create(&self, draft: ProjectDraft) -> Result<ProjectRecord, ProjectRepositoryError>;

    /// Full-row replace. Fails with `NotFound` when the id is absent.
    async fn update(
        &self,
        id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    /// Permanent removal. Callers must have confirmed with the user first.
    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
