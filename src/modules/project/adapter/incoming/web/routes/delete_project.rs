use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::access::adapter::incoming::web::extractors::admin::AdminKey;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminKey,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
