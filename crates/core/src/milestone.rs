//! Milestone model - workflow stages with content quotas.

use crate::content::ContentType;
use crate::id::{MilestoneId, ProjectId};
use crate::Time;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A milestone is a named stage of the release workflow with a due date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// Unique identifier
    pub id: MilestoneId,

    /// Owning project
    pub project_id: ProjectId,

    /// Milestone name, e.g. "Mastering Complete"
    pub name: String,

    /// When this milestone is due
    pub due_date: NaiveDate,

    /// Current status, set by completion actions outside the engine
    pub status: MilestoneStatus,

    /// Whether an incomplete milestone holds up release clearance
    pub blocks_release: bool,

    /// Whether completion requires an attached proof artifact
    pub proof_required: bool,

    /// When the milestone was marked complete, if it was
    pub completed_at: Option<Time>,

    /// When created
    pub created_at: Time,
}

impl Milestone {
    /// Whether the milestone has been completed.
    pub fn is_complete(&self) -> bool {
        matches!(self.status, MilestoneStatus::Complete)
    }
}

/// Milestone status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Not yet started
    Pending,
    /// Work has begun
    InProgress,
    /// Done
    Complete,
    /// Past due and not complete
    Overdue,
}

impl MilestoneStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "pending",
            MilestoneStatus::InProgress => "in_progress",
            MilestoneStatus::Complete => "complete",
            MilestoneStatus::Overdue => "overdue",
        }
    }
}

/// A minimum-count constraint on captured content for one milestone.
///
/// Many requirements may exist per milestone, one per content type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRequirement {
    /// Milestone this requirement gates
    pub milestone_id: MilestoneId,

    /// Content type being counted
    pub content_type: ContentType,

    /// Minimum number of items required
    pub minimum_count: u32,
}
