//! Deadline risk analysis against industry-standard buffers.

use chrono::NaiveDate;
use relman_core::{Milestone, MilestoneId};
use serde::{Deserialize, Serialize};

/// Buffer in days-before-release per milestone name. Names not in the
/// table fall back to [`DEFAULT_BUFFER_DAYS`]; the match is exact and
/// case-sensitive.
pub const MILESTONE_BUFFERS: [(&str, i64); 11] = [
    ("Recording Complete", 90),
    ("Mixing Complete", 60),
    ("Mastering Complete", 45),
    ("Metadata Tagging Complete", 35),
    ("Artwork Finalized", 35),
    ("Upload to Distributor", 30),
    ("Spotify Playlist Submission", 28),
    ("Teaser Content Released", 21),
    ("Marketing Campaign Launch", 14),
    ("Pre-Save Campaign Active", 14),
    ("Release Day", 0),
];

/// Buffer applied to milestone names without a table entry.
pub const DEFAULT_BUFFER_DAYS: i64 = 30;

/// Milestones that are critical by name regardless of flags.
pub const CRITICAL_MILESTONES: [&str; 4] = [
    "Upload to Distributor",
    "Spotify Playlist Submission",
    "Release Day",
    "Metadata Tagging Complete",
];

/// Risk classification for a milestone or a whole schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// At least a week of spare buffer
    Safe,
    /// On or slightly before the recommended date
    Tight,
    /// Up to a week past the recommended date
    Risky,
    /// More than a week past the recommended date
    Critical,
}

impl RiskLevel {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Tight => "tight",
            RiskLevel::Risky => "risky",
            RiskLevel::Critical => "critical",
        }
    }
}

/// Recommended scheduling for one milestone. Derived, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineRecommendation {
    /// The milestone
    pub milestone_id: MilestoneId,

    /// Milestone name
    pub name: String,

    /// Date the milestone is actually due
    pub actual_date: NaiveDate,

    /// Release date minus the buffer for this milestone
    pub recommended_date: NaiveDate,

    /// actual minus recommended; positive means scheduled late
    pub days_difference: i64,

    /// Risk bucket for this milestone
    pub risk: RiskLevel,

    /// Whether this milestone is release-critical
    pub is_critical: bool,
}

/// Deadline risk analysis for a project's schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineAnalysis {
    /// Worst-case schedule assessment
    pub overall_risk: RiskLevel,

    /// Days from the reference "today" to the release date
    pub total_days_to_release: i64,

    /// Per-milestone recommendations, in input order
    pub milestones: Vec<DeadlineRecommendation>,
}

/// Look up the buffer for a milestone name.
pub fn buffer_days(name: &str) -> i64 {
    MILESTONE_BUFFERS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, days)| *days)
        .unwrap_or(DEFAULT_BUFFER_DAYS)
}

fn classify(days_difference: i64) -> RiskLevel {
    if days_difference <= -7 {
        RiskLevel::Safe
    } else if days_difference <= 0 {
        RiskLevel::Tight
    } else if days_difference <= 7 {
        RiskLevel::Risky
    } else {
        RiskLevel::Critical
    }
}

fn is_critical(milestone: &Milestone) -> bool {
    milestone.blocks_release || CRITICAL_MILESTONES.contains(&milestone.name.as_str())
}

/// Compare each milestone's due date against its buffer-derived
/// recommended date and classify schedule risk.
///
/// `today` is the caller's reference date; it only affects
/// `total_days_to_release`, never the per-milestone buckets, which are
/// derived purely from the release date.
pub fn analyze_deadlines(
    milestones: &[Milestone],
    release_date: NaiveDate,
    today: NaiveDate,
) -> DeadlineAnalysis {
    let recommendations: Vec<DeadlineRecommendation> = milestones
        .iter()
        .map(|milestone| {
            let recommended_date = release_date - chrono::Duration::days(buffer_days(&milestone.name));
            let days_difference = (milestone.due_date - recommended_date).num_days();

            DeadlineRecommendation {
                milestone_id: milestone.id,
                name: milestone.name.clone(),
                actual_date: milestone.due_date,
                recommended_date,
                days_difference,
                risk: classify(days_difference),
                is_critical: is_critical(milestone),
            }
        })
        .collect();

    let critical_count = recommendations
        .iter()
        .filter(|r| r.risk == RiskLevel::Critical)
        .count();
    let risky_count = recommendations
        .iter()
        .filter(|r| r.risk == RiskLevel::Risky)
        .count();
    let late_count = recommendations
        .iter()
        .filter(|r| r.days_difference > 0)
        .count();

    let overall_risk = if critical_count > 0 {
        RiskLevel::Critical
    } else if risky_count > 2 {
        RiskLevel::Risky
    } else if risky_count > 0 || late_count > 3 {
        RiskLevel::Tight
    } else {
        RiskLevel::Safe
    };

    DeadlineAnalysis {
        overall_risk,
        total_days_to_release: (release_date - today).num_days(),
        milestones: recommendations,
    }
}
