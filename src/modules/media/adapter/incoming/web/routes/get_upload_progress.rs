use actix_web::{get, web, Responder};

use crate::modules::access::adapter::incoming::web::extractors::admin::AdminKey;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Polled by the admin screen while an upload batch is in flight. Entries
/// disappear shortly after reaching 100%.
#[get("/api/admin/uploads/progress")]
pub async fn get_upload_progress_handler(
    _admin: AdminKey,
    data: web::Data<AppState>,
) -> impl Responder {
    let entries = data.media.progress.snapshot().await;
    ApiResponse::success(entries)
}
