//! Content quota evaluation for one milestone.

use relman_core::{ContentRequirement, ContentType, MilestoneId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Quota verdict for one milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaStatus {
    /// Milestone the quota applies to
    pub milestone_id: MilestoneId,

    /// Whether every requirement is satisfied
    pub quota_met: bool,

    /// Per-requirement detail, in requirement order
    pub requirements: Vec<RequirementStatus>,
}

/// Standing of a single content requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementStatus {
    /// Content type being counted
    pub content_type: ContentType,

    /// Minimum required
    pub required: u32,

    /// Items actually captured
    pub actual: u32,

    /// How many more are needed
    pub missing: u32,

    /// Whether this requirement is satisfied
    pub met: bool,
}

/// Compare a milestone's content requirements against actual captured
/// counts. A milestone with no requirements trivially meets its quota —
/// absence of a rule is not a failure.
pub fn evaluate_quota(
    milestone_id: MilestoneId,
    requirements: &[ContentRequirement],
    counts: &HashMap<ContentType, u32>,
) -> QuotaStatus {
    let requirements: Vec<RequirementStatus> = requirements
        .iter()
        .map(|req| {
            let actual = counts.get(&req.content_type).copied().unwrap_or(0);
            RequirementStatus {
                content_type: req.content_type,
                required: req.minimum_count,
                actual,
                missing: req.minimum_count.saturating_sub(actual),
                met: actual >= req.minimum_count,
            }
        })
        .collect();

    QuotaStatus {
        milestone_id,
        quota_met: requirements.iter().all(|r| r.met),
        requirements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(content_type: ContentType, minimum_count: u32) -> ContentRequirement {
        ContentRequirement {
            milestone_id: MilestoneId::new(),
            content_type,
            minimum_count,
        }
    }

    #[test]
    fn empty_requirements_trivially_met() {
        let status = evaluate_quota(MilestoneId::new(), &[], &HashMap::new());
        assert!(status.quota_met);
        assert!(status.requirements.is_empty());
    }

    #[test]
    fn missing_counts_shortfall() {
        let counts = HashMap::from([(ContentType::Photo, 1)]);
        let status = evaluate_quota(
            MilestoneId::new(),
            &[requirement(ContentType::Photo, 3)],
            &counts,
        );

        assert!(!status.quota_met);
        assert_eq!(status.requirements[0].missing, 2);
        assert!(!status.requirements[0].met);
    }

    #[test]
    fn met_at_exact_count() {
        let counts = HashMap::from([(ContentType::Video, 2)]);
        let status = evaluate_quota(
            MilestoneId::new(),
            &[requirement(ContentType::Video, 2)],
            &counts,
        );

        assert!(status.quota_met);
        assert_eq!(status.requirements[0].missing, 0);
    }

    #[test]
    fn one_unmet_requirement_fails_overall() {
        let counts = HashMap::from([(ContentType::Photo, 5), (ContentType::Video, 0)]);
        let status = evaluate_quota(
            MilestoneId::new(),
            &[
                requirement(ContentType::Photo, 3),
                requirement(ContentType::Video, 1),
            ],
            &counts,
        );

        assert!(!status.quota_met);
        assert!(status.requirements[0].met);
        assert!(!status.requirements[1].met);
    }

    #[test]
    fn surplus_does_not_offset_other_types() {
        let counts = HashMap::from([(ContentType::Photo, 10)]);
        let status = evaluate_quota(
            MilestoneId::new(),
            &[
                requirement(ContentType::Photo, 1),
                requirement(ContentType::Audio, 1),
            ],
            &counts,
        );

        assert!(!status.quota_met);
        assert_eq!(status.requirements[1].missing, 1);
    }

    #[test]
    fn idempotent_over_same_snapshot() {
        let counts = HashMap::from([(ContentType::Photo, 1)]);
        let reqs = [requirement(ContentType::Photo, 3)];
        let milestone_id = MilestoneId::new();

        let a = evaluate_quota(milestone_id, &reqs, &counts);
        let b = evaluate_quota(milestone_id, &reqs, &counts);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
