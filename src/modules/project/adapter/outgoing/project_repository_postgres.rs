use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::CardSize;
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectDraft, ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_record).collect()
    }

    async fn find(&self, id: Uuid) -> Result<ProjectRecord, ProjectRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_record(model)
    }

    async fn create(&self, draft: ProjectDraft) -> Result<ProjectRecord, ProjectRepositoryError> {
        let mut model = draft_to_active_model(draft)?;
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_record(result)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ProjectDraft,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let model = draft_to_active_model(draft)?;

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: projects::Model) -> Result<ProjectRecord, ProjectRepositoryError> {
    // Canonical list wins; the legacy single-URL column only backfills rows
    // written before the content_images migration.
    let content_images = match model.content_images {
        Some(json) => from_json(&json)?,
        None => model.contentimage.into_iter().collect(),
    };

    Ok(ProjectRecord {
        id: model.id,
        title: model.title,
        description: model.description,
        tags: model.tags,
        tools: model.tools,
        image: model.image,
        content_images,
        size: CardSize::from_db(&model.size),
        link: model.link,
        video_url: model.video_url,
        full_content: model.full_content,
        gallery: from_json(&model.gallery)?,
        stats: from_json(&model.stats)?,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

// Writes never touch the legacy contentimage column; it stays NotSet.
fn draft_to_active_model(draft: ProjectDraft) -> Result<ActiveModel, ProjectRepositoryError> {
    let mut model = <ActiveModel as Default>::default();

    model.title = Set(draft.title.trim().to_string());
    model.description = Set(draft.description);
    model.tags = Set(draft.tags);
    model.tools = Set(draft.tools);
    model.image = Set(draft.image);
    model.content_images = Set(Some(to_json(&draft.content_images)?));
    model.size = Set(draft.size.as_str().to_string());
    model.link = Set(draft.link);
    model.video_url = Set(draft.video_url);
    model.full_content = Set(draft.full_content);
    model.gallery = Set(to_json(&draft.gallery)?);
    model.stats = Set(to_json(&draft.stats)?);

    Ok(model)
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
