pub mod ingest_images;

pub use ingest_images::{IngestImagesError, IngestImagesUseCase};
