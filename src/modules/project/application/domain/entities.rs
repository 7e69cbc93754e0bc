use serde::{Deserialize, Serialize};
use std::fmt;

//
// ──────────────────────────────────────────────────────────
// Card size (layout hint)
// ──────────────────────────────────────────────────────────
//

/// Aspect-ratio hint for the public gallery grid. Render-time only; no
/// structural invariant beyond being one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    Square,
    Portrait,
    Landscape,
    Tall,
    Wide,
}

impl Default for CardSize {
    fn default() -> Self {
        CardSize::Square
    }
}

impl CardSize {
    /// Lenient read path: rows written before the size vocabulary settled
    /// fall back to square instead of failing the whole listing.
    pub fn from_db(value: &str) -> Self {
        match value {
            "square" => CardSize::Square,
            "portrait" => CardSize::Portrait,
            "landscape" => CardSize::Landscape,
            "tall" => CardSize::Tall,
            "wide" => CardSize::Wide,
            _ => CardSize::Square,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardSize::Square => "square",
            CardSize::Portrait => "portrait",
            CardSize::Landscape => "landscape",
            CardSize::Tall => "tall",
            CardSize::Wide => "wide",
        }
    }
}

impl fmt::Display for CardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Gallery & stats
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Gif,
}

/// Secondary media item shown in the project detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStat {
    pub label: String,
    pub value: String,
}
