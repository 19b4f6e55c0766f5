//! Content model - captured promotional assets.

use crate::id::{ContentItemId, MilestoneId, ProjectId};
use crate::Time;
use serde::{Deserialize, Serialize};

/// A captured content asset. Only counted by the engine, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique identifier
    pub id: ContentItemId,

    /// Owning project
    pub project_id: ProjectId,

    /// Milestone this item was captured for, if tagged
    pub milestone_id: Option<MilestoneId>,

    /// What kind of asset this is
    pub content_type: ContentType,

    /// When captured
    pub created_at: Time,
}

/// Content types the quota system counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Still photography
    Photo,
    /// Video footage
    Video,
    /// Audio snippet or voice memo
    Audio,
    /// Designed graphic or artwork
    Graphic,
    /// Written document (press release, lyric sheet)
    Document,
}

impl ContentType {
    /// All content types, in display order.
    pub const ALL: [ContentType; 5] = [
        ContentType::Photo,
        ContentType::Video,
        ContentType::Audio,
        ContentType::Graphic,
        ContentType::Document,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Photo => "photo",
            ContentType::Video => "video",
            ContentType::Audio => "audio",
            ContentType::Graphic => "graphic",
            ContentType::Document => "document",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "photo" => Ok(ContentType::Photo),
            "video" => Ok(ContentType::Video),
            "audio" => Ok(ContentType::Audio),
            "graphic" => Ok(ContentType::Graphic),
            "document" => Ok(ContentType::Document),
            other => Err(format!("unknown content type: {}", other)),
        }
    }
}
