//! Release clearance aggregation.

use crate::budget::{AlertKind, AlertSeverity, BudgetAlert};
use crate::quota::QuotaStatus;
use crate::teaser::TeaserStatus;
use relman_core::{Milestone, MilestoneId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Missing-requirement reasons, grouped by category.
///
/// `files` and `legal` are reserved groups: proof-of-completion
/// attachments and rights clearance are recorded but not yet gated, so
/// both stay empty in the current rule set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissingRequirements {
    /// Incomplete blocking milestones, unmet quotas, unmet teaser minimum
    pub milestones: Vec<String>,

    /// Advisory budget findings; never flip the verdict
    pub budget: Vec<String>,

    /// Reserved for proof-of-completion attachments
    pub files: Vec<String>,

    /// Reserved for rights and licensing gates
    pub legal: Vec<String>,
}

/// The aggregate cleared-for-release verdict. Recomputed on demand,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessVerdict {
    /// Whether the project is cleared for release
    pub cleared: bool,

    /// Everything standing in the way, grouped by category
    pub missing: MissingRequirements,
}

/// Fold evaluator outputs into the cleared/not-cleared verdict.
///
/// Only hard gates flip the verdict: an incomplete blocking milestone, an
/// unmet quota on a blocking milestone, or an unmet teaser minimum.
/// Critical budget alerts are surfaced as reasons but remain advisory.
pub fn compute_clearance(
    milestones: &[Milestone],
    quotas: &HashMap<MilestoneId, QuotaStatus>,
    alerts: &[BudgetAlert],
    teaser: &TeaserStatus,
) -> ReadinessVerdict {
    let mut cleared = true;
    let mut missing = MissingRequirements::default();

    for milestone in milestones.iter().filter(|m| m.blocks_release) {
        if !milestone.is_complete() {
            missing
                .milestones
                .push(format!("milestone '{}' is not complete", milestone.name));
            cleared = false;
        }

        if let Some(quota) = quotas.get(&milestone.id) {
            if !quota.quota_met {
                missing.milestones.push(format!(
                    "content quota not met for milestone '{}'",
                    milestone.name
                ));
                cleared = false;
            }
        }
    }

    if !teaser.met {
        missing.milestones.push(format!(
            "minimum of {} teaser posts required, {} posted",
            teaser.required, teaser.actual
        ));
        cleared = false;
    }

    for alert in alerts
        .iter()
        .filter(|a| a.severity == AlertSeverity::Critical)
    {
        let reason = match alert.kind {
            AlertKind::CategoryOverage => format!(
                "{} spend {:.2} exceeds recommended {:.2}",
                alert.category, alert.spent, alert.recommended_amount
            ),
            AlertKind::MarketingUnderspend => format!(
                "marketing spend {:.2} is below the {:.2} pre-release floor",
                alert.spent, alert.recommended_amount
            ),
        };
        missing.budget.push(reason);
    }

    ReadinessVerdict { cleared, missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{analyze_budget, generate_budget_alerts};
    use crate::quota::evaluate_quota;
    use crate::teaser::check_teaser_requirement;
    use chrono::{NaiveDate, Utc};
    use relman_core::{ContentRequirement, ContentType, MilestoneStatus, ProjectId};

    fn milestone(name: &str, status: MilestoneStatus, blocks_release: bool) -> Milestone {
        Milestone {
            id: MilestoneId::new(),
            project_id: ProjectId::new(),
            name: name.to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            status,
            blocks_release,
            proof_required: false,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    fn met_teaser() -> TeaserStatus {
        check_teaser_requirement(3)
    }

    #[test]
    fn incomplete_blocking_milestone_blocks_clearance() {
        let milestones = vec![milestone("Mastering Complete", MilestoneStatus::InProgress, true)];
        let verdict = compute_clearance(&milestones, &HashMap::new(), &[], &met_teaser());

        assert!(!verdict.cleared);
        assert_eq!(verdict.missing.milestones.len(), 1);
        assert!(verdict.missing.milestones[0].contains("Mastering Complete"));
    }

    #[test]
    fn non_blocking_milestone_is_ignored() {
        let milestones = vec![milestone("Focus Track Chosen", MilestoneStatus::Pending, false)];
        let verdict = compute_clearance(&milestones, &HashMap::new(), &[], &met_teaser());
        assert!(verdict.cleared);
    }

    #[test]
    fn unmet_quota_on_blocking_milestone_blocks_clearance() {
        let m = milestone("Recording Complete", MilestoneStatus::Complete, true);
        let requirements = [ContentRequirement {
            milestone_id: m.id,
            content_type: ContentType::Photo,
            minimum_count: 3,
        }];
        let quota = evaluate_quota(m.id, &requirements, &HashMap::new());
        let quotas = HashMap::from([(m.id, quota)]);

        let verdict = compute_clearance(&[m], &quotas, &[], &met_teaser());
        assert!(!verdict.cleared);
        assert!(verdict.missing.milestones[0].contains("quota"));
    }

    #[test]
    fn unmet_teaser_blocks_clearance() {
        let milestones = vec![milestone("Release Day", MilestoneStatus::Complete, true)];
        let teaser = check_teaser_requirement(1);
        let verdict = compute_clearance(&milestones, &HashMap::new(), &[], &teaser);

        assert!(!verdict.cleared);
        assert!(verdict.missing.milestones[0].contains("teaser"));
    }

    #[test]
    fn critical_budget_alerts_are_advisory_only() {
        let milestones = vec![milestone("Release Day", MilestoneStatus::Complete, true)];
        let spend = HashMap::from([(relman_core::BudgetCategory::Production, 50_000.0)]);
        let summary = analyze_budget(100_000.0, &spend);
        let alerts = generate_budget_alerts(&summary, 120);

        let verdict = compute_clearance(&milestones, &HashMap::new(), &alerts, &met_teaser());
        assert!(verdict.cleared);
        assert_eq!(verdict.missing.budget.len(), 1);
        assert!(verdict.missing.budget[0].contains("production"));
    }

    #[test]
    fn warning_alerts_are_not_surfaced_as_reasons() {
        let spend = HashMap::from([(relman_core::BudgetCategory::Production, 41_000.0)]);
        let summary = analyze_budget(100_000.0, &spend);
        let alerts = generate_budget_alerts(&summary, 120);
        assert_eq!(alerts.len(), 1);

        let verdict = compute_clearance(&[], &HashMap::new(), &alerts, &met_teaser());
        assert!(verdict.missing.budget.is_empty());
    }

    #[test]
    fn cleared_when_all_gates_pass() {
        let m = milestone("Upload to Distributor", MilestoneStatus::Complete, true);
        let requirements = [ContentRequirement {
            milestone_id: m.id,
            content_type: ContentType::Video,
            minimum_count: 1,
        }];
        let counts = HashMap::from([(ContentType::Video, 2)]);
        let quota = evaluate_quota(m.id, &requirements, &counts);
        let quotas = HashMap::from([(m.id, quota)]);

        let verdict = compute_clearance(&[m], &quotas, &[], &met_teaser());
        assert!(verdict.cleared);
        assert!(verdict.missing.milestones.is_empty());
    }

    #[test]
    fn blocking_gate_overrides_healthy_budget_and_teasers() {
        let milestones = vec![
            milestone("Metadata Tagging Complete", MilestoneStatus::Overdue, true),
            milestone("Artwork Finalized", MilestoneStatus::Complete, true),
        ];
        let verdict = compute_clearance(&milestones, &HashMap::new(), &[], &met_teaser());

        assert!(!verdict.cleared);
        assert_eq!(verdict.missing.milestones.len(), 1);
        assert!(verdict.missing.budget.is_empty());
    }
}
