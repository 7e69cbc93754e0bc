use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects/{id}")]
pub async fn get_public_single_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.get_single.execute(id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::QueryFailed(msg)) => {
            error!("Failed to fetch project {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
