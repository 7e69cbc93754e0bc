pub mod ingest_images_service;
pub mod upload_progress_tracker;

pub use ingest_images_service::IngestImagesService;
pub use upload_progress_tracker::UploadProgressTracker;
