//! RelMan core data models.
//!
//! This crate defines the persisted entities of the music-release
//! tracking system. It contains no I/O and no decision logic; the
//! readiness engine consumes these records as immutable snapshots.

#![warn(missing_docs)]

// Core identities
mod id;

// Project and milestone workflow
mod project;
mod milestone;

// Captured assets and requirements
mod content;

// Money and promotion
mod budget;
mod teaser;

// Re-exports
pub use id::*;

pub use project::{Project, ReleaseType};
pub use milestone::{ContentRequirement, Milestone, MilestoneStatus};
pub use content::{ContentItem, ContentType};
pub use budget::{ApprovalStatus, BudgetCategory, BudgetItem};
pub use teaser::TeaserPost;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
