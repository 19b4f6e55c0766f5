//! Budget health analysis against industry-standard allocations.

use relman_core::BudgetCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Recommended fraction of total budget per category. Sums to 1.00.
pub const RECOMMENDED_ALLOCATIONS: [(BudgetCategory, f64); 6] = [
    (BudgetCategory::Production, 0.35),
    (BudgetCategory::Marketing, 0.30),
    (BudgetCategory::ContentCreation, 0.10),
    (BudgetCategory::Distribution, 0.10),
    (BudgetCategory::Admin, 0.10),
    (BudgetCategory::Contingency, 0.05),
];

/// Spend above this percent of the category recommendation is a warning.
pub const WARNING_THRESHOLD_PCT: f64 = 115.0;

/// Spend above this percent of the category recommendation is critical.
pub const CRITICAL_THRESHOLD_PCT: f64 = 130.0;

/// Spend at or above this percent of the recommendation is on track.
pub const ON_TRACK_FLOOR_PCT: f64 = 90.0;

/// Marketing spend below this fraction of total budget close to release
/// triggers a dedicated underspend alert.
pub const MARKETING_FLOOR_FRACTION: f64 = 0.25;

/// Days-to-release window inside which the marketing floor applies.
pub const RELEASE_PROXIMITY_DAYS: i64 = 30;

/// Health classification for one spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    /// Spend exceeds 130% of the recommendation
    #[serde(rename = "critical")]
    Critical,
    /// Spend exceeds 115% of the recommendation
    #[serde(rename = "warning")]
    Warning,
    /// Spend within 90-115% of the recommendation
    #[serde(rename = "on-track")]
    OnTrack,
    /// Spend below 90% of the recommendation
    #[serde(rename = "under")]
    Under,
}

/// Health of one spending category versus its recommended allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryHealth {
    /// The category
    pub category: BudgetCategory,

    /// Total spend recorded for this category
    pub spent: f64,

    /// Recommended amount (allocation fraction x total budget)
    pub recommended_amount: f64,

    /// Spend as a percentage of total budget
    pub percentage: f64,

    /// Spend as a percentage of the recommended amount
    pub percent_of_recommended: f64,

    /// Health classification
    pub status: BudgetStatus,
}

/// Budget health summary for a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Project total budget
    pub total_budget: f64,

    /// Sum of all category spend
    pub total_spent: f64,

    /// Budget remaining
    pub remaining: f64,

    /// Total spend as a percentage of total budget
    pub percentage_spent: f64,

    /// Per-category health, in allocation-table order
    pub categories: Vec<CategoryHealth>,
}

impl BudgetSummary {
    /// Health record for a category. Summaries built by
    /// [`analyze_budget`] carry every known category; `None` only for a
    /// hand-assembled summary missing the row.
    pub fn category(&self, category: BudgetCategory) -> Option<&CategoryHealth> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Needs attention
    Warning,
    /// Needs immediate attention
    Critical,
}

/// What triggered an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// A category exceeded its recommended allocation
    CategoryOverage,
    /// Marketing spend is too low this close to release
    MarketingUnderspend,
}

/// A budget alert. Advisory only — alerts never gate release clearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAlert {
    /// What rule fired
    pub kind: AlertKind,

    /// How bad it is
    pub severity: AlertSeverity,

    /// Category concerned
    pub category: BudgetCategory,

    /// Actual spend
    pub spent: f64,

    /// The reference amount the rule compared against
    pub recommended_amount: f64,

    /// Spend minus reference; positive is overage, negative is shortfall
    pub delta: f64,
}

fn classify(percent_of_recommended: f64) -> BudgetStatus {
    if percent_of_recommended > CRITICAL_THRESHOLD_PCT {
        BudgetStatus::Critical
    } else if percent_of_recommended > WARNING_THRESHOLD_PCT {
        BudgetStatus::Warning
    } else if percent_of_recommended >= ON_TRACK_FLOOR_PCT {
        BudgetStatus::OnTrack
    } else {
        BudgetStatus::Under
    }
}

/// Analyze per-category spend against the recommended allocations.
///
/// Every known category appears in the summary, even with zero spend.
/// Percentages are computed against the project's single total budget.
pub fn analyze_budget(
    total_budget: f64,
    spend_by_category: &HashMap<BudgetCategory, f64>,
) -> BudgetSummary {
    let categories: Vec<CategoryHealth> = RECOMMENDED_ALLOCATIONS
        .iter()
        .map(|&(category, fraction)| {
            let spent = spend_by_category.get(&category).copied().unwrap_or(0.0);
            let recommended_amount = total_budget * fraction;
            let percentage = if total_budget > 0.0 {
                spent / total_budget * 100.0
            } else {
                0.0
            };
            let percent_of_recommended = if recommended_amount > 0.0 {
                spent / recommended_amount * 100.0
            } else {
                0.0
            };

            CategoryHealth {
                category,
                spent,
                recommended_amount,
                percentage,
                percent_of_recommended,
                status: classify(percent_of_recommended),
            }
        })
        .collect();

    let total_spent: f64 = categories.iter().map(|c| c.spent).sum();
    let percentage_spent = if total_budget > 0.0 {
        total_spent / total_budget * 100.0
    } else {
        0.0
    };

    BudgetSummary {
        total_budget,
        total_spent,
        remaining: total_budget - total_spent,
        percentage_spent,
        categories,
    }
}

/// Generate budget alerts from a summary.
///
/// Emits one overage alert per category past the warning threshold, and an
/// independent marketing-underspend alert when the release is at most 30
/// days out and marketing spend sits below 25% of total budget. The two
/// rule families are independent: marketing can be under its own
/// allocation and still trigger the proximity alert.
pub fn generate_budget_alerts(summary: &BudgetSummary, days_until_release: i64) -> Vec<BudgetAlert> {
    let mut alerts = Vec::new();

    for health in &summary.categories {
        let severity = if health.percent_of_recommended > CRITICAL_THRESHOLD_PCT {
            AlertSeverity::Critical
        } else if health.percent_of_recommended > WARNING_THRESHOLD_PCT {
            AlertSeverity::Warning
        } else {
            continue;
        };

        alerts.push(BudgetAlert {
            kind: AlertKind::CategoryOverage,
            severity,
            category: health.category,
            spent: health.spent,
            recommended_amount: health.recommended_amount,
            delta: health.spent - health.recommended_amount,
        });
    }

    if let Some(marketing) = summary.category(BudgetCategory::Marketing) {
        let marketing_floor = summary.total_budget * MARKETING_FLOOR_FRACTION;
        if days_until_release <= RELEASE_PROXIMITY_DAYS && marketing.spent < marketing_floor {
            alerts.push(BudgetAlert {
                kind: AlertKind::MarketingUnderspend,
                severity: AlertSeverity::Critical,
                category: BudgetCategory::Marketing,
                spent: marketing.spent,
                recommended_amount: marketing_floor,
                delta: marketing.spent - marketing_floor,
            });
        }
    }

    alerts
}
