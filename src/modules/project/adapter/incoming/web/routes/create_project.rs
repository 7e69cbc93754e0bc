use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::access::adapter::incoming::web::extractors::admin::AdminKey;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectDraft;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _admin: AdminKey,
    req: web::Json<ProjectDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::TooManyContentImages { max }) => ApiResponse::bad_request(
            "TOO_MANY_CONTENT_IMAGES",
            &format!("A project holds at most {max} content images"),
        ),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
