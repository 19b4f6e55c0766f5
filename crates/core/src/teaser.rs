//! Teaser model - promotional posts referencing the upcoming release.

use crate::id::{ProjectId, TeaserPostId};
use crate::Time;
use serde::{Deserialize, Serialize};

/// A promotional teaser post. Compliance only counts these per project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeaserPost {
    /// Unique identifier
    pub id: TeaserPostId,

    /// Owning project
    pub project_id: ProjectId,

    /// Platform the post went out on, e.g. "instagram"
    pub platform: String,

    /// Post caption
    pub caption: String,

    /// When posted
    pub posted_at: Time,
}
