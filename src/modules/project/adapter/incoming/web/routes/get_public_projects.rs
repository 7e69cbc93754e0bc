use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::ListProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    /// Comma-separated tag names. Absent or empty means no filtering.
    pub tags: Option<String>,
}

impl ListProjectsQuery {
    pub fn selected_tags(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/api/projects")]
pub async fn get_public_projects_handler(
    query: web::Query<ListProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let selected = query.selected_tags();

    match data.project.list.execute(&selected).await {
        Ok(projects) => ApiResponse::success(projects),

        Err(ListProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
