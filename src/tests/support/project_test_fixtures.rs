use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    CardSize, GalleryItem, MediaKind, ProjectStat,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectDraft, ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

pub fn sample_record() -> ProjectRecord {
    ProjectRecord {
        id: Uuid::new_v4(),
        title: "Neon Tokyo".to_string(),
        description: "A cyberpunk illustration series".to_string(),
        tags: vec!["Illustration".to_string(), "2D".to_string()],
        tools: vec!["Procreate".to_string()],
        image: "https://storage.googleapis.com/portfolio-images/cover.jpg".to_string(),
        content_images: vec![
            "https://storage.googleapis.com/portfolio-images/detail-1.jpg".to_string(),
        ],
        size: CardSize::Portrait,
        link: "https://example.com/neon-tokyo".to_string(),
        video_url: None,
        full_content: Some("Full writeup".to_string()),
        gallery: vec![GalleryItem {
            kind: MediaKind::Image,
            url: "https://storage.googleapis.com/portfolio-images/gallery-1.jpg".to_string(),
            caption: Some("Street level".to_string()),
        }],
        stats: vec![ProjectStat {
            label: "Duration".to_string(),
            value: "3 weeks".to_string(),
        }],
        created_at: Utc::now(),
    }
}

pub fn record_with_tags(title: &str, tags: &[&str]) -> ProjectRecord {
    let mut record = sample_record();
    record.id = Uuid::new_v4();
    record.title = title.to_string();
    record.tags = tags.iter().map(|t| t.to_string()).collect();
    record
}

pub fn sample_draft() -> ProjectDraft {
    ProjectDraft {
        title: "Neon Tokyo".to_string(),
        description: "A cyberpunk illustration series".to_string(),
        tags: vec!["Illustration".to_string(), "2D".to_string()],
        tools: vec!["Procreate".to_string()],
        image: "https://storage.googleapis.com/portfolio-images/cover.jpg".to_string(),
        content_images: vec![
            "https://storage.googleapis.com/portfolio-images/detail-1.jpg".to_string(),
        ],
        size: CardSize::Portrait,
        link: "https://example.com/neon-tokyo".to_string(),
        video_url: None,
        full_content: Some("Full writeup".to_string()),
        gallery: Vec::new(),
        stats: Vec::new(),
    }
}

/// Repository backed by a shared Vec, newest record first, so service tests
/// can exercise create/update/delete flows without a database.
#[derive(Clone)]
pub struct InMemoryProjectRepository {
    records: Arc<Mutex<Vec<ProjectRecord>>>,
    failure: Option<String>,
}

impl InMemoryProjectRepository {
    pub fn with_records(records: Vec<ProjectRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            failure: None,
        }
    }

    /// Every call fails with a database error carrying `msg`.
    pub fn failing(msg: &str) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            failure: Some(msg.to_string()),
        }
    }

    pub fn records(&self) -> Vec<ProjectRecord> {
        self.records.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), ProjectRepositoryError> {
        match &self.failure {
            Some(msg) => Err(ProjectRepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }

    fn record_from_draft(draft: ProjectDraft, id: Uuid) -> ProjectRecord {
        ProjectRecord {
            id,
            title: draft.title,
            description: draft.description,
            tags: draft.tags,
            tools: draft.tools,
            image: draft.image,
            content_images: draft.content_images,
            size: draft.size,
            link: draft.link,
            video_url: draft.video_url,
            full_content: draft.full_content,
            gallery: draft.gallery,
            stats: draft.stats,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        self.check_failure()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn find(&self, id: Uuid) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.check_failure()?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn create(&self, draft: ProjectDraft) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.check_failure()?;
        let record = Self::record_from_draft(draft, Uuid::new_v4());
        self.records.lock().unwrap().insert(0, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.check_failure()?;
        let mut records = self.records.lock().unwrap();
        let existing = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        let created_at = existing.created_at;
        let mut updated = Self::record_from_draft(draft, id);
        updated.created_at = created_at;
        *existing = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        self.check_failure()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}
