use crate::modules::project::application::ports::outgoing::project_repository::MAX_CONTENT_IMAGES;

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub allowed_mime_types: &'static [&'static str],
    pub allowed_extensions: &'static [&'static str],
    /// Hard cap for a multi-image field after merging with existing URLs.
    pub max_multi_images: usize,
    pub bucket_name: String,
}

impl UploadPolicy {
    pub const DEFAULT_BUCKET_NAME: &'static str = "portfolio-images";

    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "image/png",
        "image/jpg",
        "image/jpeg",
        "image/gif",
        "image/heic",
    ];

    pub const DEFAULT_ALLOWED_EXTENSIONS: &'static [&'static str] =
        &["png", "jpg", "jpeg", "gif", "heic"];

    /// Load policy with `bucket_name` from `PORTFOLIO_UPLOAD_BUCKET`,
    /// fallback to "portfolio-images".
    pub fn from_env() -> Self {
        let bucket_name = std::env::var("PORTFOLIO_UPLOAD_BUCKET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BUCKET_NAME.to_string());

        Self::new(bucket_name)
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(bucket_name: String) -> Self {
        Self {
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS,
            max_multi_images: MAX_CONTENT_IMAGES,
            bucket_name,
        }
    }

    /// A file passes when either its declared MIME type or its extension is
    /// on the allow list. Browsers are inconsistent about which they send,
    /// so one match is enough.
    pub fn allows(&self, file_name: &str, content_type: Option<&str>) -> bool {
        let by_mime = content_type
            .map(|ct| {
                let ct = ct.to_lowercase();
                self.allowed_mime_types.contains(&ct.as_str())
            })
            .unwrap_or(false);

        let by_extension = extension_of(file_name)
            .map(|ext| self.allowed_extensions.contains(&ext.as_str()))
            .unwrap_or(false);

        by_mime || by_extension
    }
}

pub fn extension_of(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
