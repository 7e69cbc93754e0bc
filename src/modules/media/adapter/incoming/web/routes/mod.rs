pub mod get_upload_progress;
pub mod upload_images;
