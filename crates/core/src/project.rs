//! Project model - a music release being tracked toward its street date.

use crate::id::ProjectId;
use crate::Time;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A music-release project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,

    /// Release title
    pub name: String,

    /// Artist name
    pub artist: String,

    /// What kind of release this is
    pub release_type: ReleaseType,

    /// Total budget for the release, in the label's base currency
    pub total_budget: f64,

    /// Planned release date
    pub release_date: NaiveDate,

    /// When created
    pub created_at: Time,
}

/// Release formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseType {
    /// One track
    Single,
    /// Extended play, typically 3-6 tracks
    Ep,
    /// Full-length album
    Album,
    /// Mixtape / compilation
    Mixtape,
}

impl ReleaseType {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Single => "single",
            ReleaseType::Ep => "ep",
            ReleaseType::Album => "album",
            ReleaseType::Mixtape => "mixtape",
        }
    }
}
