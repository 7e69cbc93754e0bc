pub use sea_orm_migration::prelude::*;

mod m20260214_101500_create_table_projects;
mod m20260508_120000_add_content_images;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260214_101500_create_table_projects::Migration),
            Box::new(m20260508_120000_add_content_images::Migration),
        ]
    }
}
