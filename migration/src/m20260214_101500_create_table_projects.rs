use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::Tags).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Tools).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Image).text().not_null())
                    // Single content image; superseded by content_images (jsonb)
                    // in a later migration but kept as a read path.
                    .col(ColumnDef::new(Projects::Contentimage).text())
                    .col(ColumnDef::new(Projects::Size).string_len(20).not_null())
                    .col(ColumnDef::new(Projects::Link).text().not_null())
                    .col(ColumnDef::new(Projects::VideoUrl).text())
                    .col(ColumnDef::new(Projects::FullContent).text())
                    .col(ColumnDef::new(Projects::Gallery).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Stats).json_binary().not_null())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Listing is always newest-first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_created_at
                ON projects (created_at DESC);
                "#,
            )
            .await?;

        // GIN index for tag containment queries
        // (`SELECT * FROM projects WHERE tags @> '["Illustration"]';`)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_tags
                ON projects USING GIN (tags);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_projects_created_at;
                DROP INDEX IF EXISTS idx_projects_tags;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    Tags,
    Tools,
    Image,
    Contentimage,
    Size,
    Link,
    VideoUrl,
    FullContent,
    Gallery,
    Stats,
    CreatedAt,
}
