use actix_multipart::form::{bytes::Bytes as MultipartBytes, text::Text, MultipartForm};
use actix_web::http::StatusCode;
use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::access::adapter::incoming::web::extractors::admin::AdminKey;
use crate::modules::media::application::domain::entities::{
    IngestBatch, SourceImage, TargetField,
};
use crate::modules::media::application::ports::incoming::use_cases::IngestImagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request form
// ──────────────────────────────────────────────────────────
//

#[derive(MultipartForm)]
pub struct UploadImagesForm {
    /// "single" or "multi". Defaults to single when absent.
    pub target: Option<Text<String>>,

    /// JSON array of URLs the project already holds. Only meaningful for
    /// the multi target.
    pub existing: Option<Text<String>>,

    #[multipart(limit = "20MB")]
    pub files: Vec<MultipartBytes>,
}

fn parse_target(raw: Option<&str>) -> Result<TargetField, ()> {
    match raw {
        None | Some("single") => Ok(TargetField::Single),
        Some("multi") => Ok(TargetField::Multi),
        Some(_) => Err(()),
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/admin/uploads")]
pub async fn upload_images_handler(
    _admin: AdminKey,
    MultipartForm(form): MultipartForm<UploadImagesForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = match parse_target(form.target.as_ref().map(|t| t.0.as_str())) {
        Ok(t) => t,
        Err(()) => {
            return ApiResponse::bad_request(
                "INVALID_TARGET",
                "target must be \"single\" or \"multi\"",
            );
        }
    };

    let existing: Vec<String> = match form.existing {
        Some(text) => match serde_json::from_str(&text.0) {
            Ok(urls) => urls,
            Err(_) => {
                return ApiResponse::bad_request(
                    "INVALID_EXISTING",
                    "existing must be a JSON array of URLs",
                );
            }
        },
        None => Vec::new(),
    };

    let files: Vec<SourceImage> = form
        .files
        .into_iter()
        .map(|f| SourceImage {
            file_name: f.file_name.unwrap_or_else(|| "upload".to_string()),
            content_type: f.content_type.map(|m| m.to_string()),
            bytes: f.data,
        })
        .collect();

    let batch = IngestBatch {
        target,
        existing,
        files,
    };

    match data.media.ingest.execute(batch).await {
        Ok(outcome) => ApiResponse::success(outcome),

        Err(IngestImagesError::BucketNotFound) => ApiResponse::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "BUCKET_NOT_FOUND",
            "Upload bucket does not exist; check storage configuration",
        ),

        Err(IngestImagesError::StorageUnavailable(msg)) => {
            error!("Storage unavailable during upload: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
