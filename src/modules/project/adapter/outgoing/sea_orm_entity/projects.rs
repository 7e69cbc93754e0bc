use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // Tag and tool lists live in JSONB rather than join tables
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Vec<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub tools: Vec<String>,

    #[sea_orm(column_type = "Text")]
    pub image: String,

    // Legacy single-URL column. Read as a fallback, never written.
    #[sea_orm(column_name = "contentimage", column_type = "Text", nullable)]
    pub contentimage: Option<String>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub content_images: Option<Json>,

    #[sea_orm(column_type = "Text", string_len = 20)]
    pub size: String,

    #[sea_orm(column_type = "Text")]
    pub link: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub video_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub full_content: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub gallery: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub stats: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        Ok(self)
    }
}
