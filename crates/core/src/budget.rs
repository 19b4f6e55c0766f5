//! Budget model - spend line items by category.

use crate::id::{BudgetItemId, ProjectId};
use serde::{Deserialize, Serialize};

/// A single budgeted expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique identifier
    pub id: BudgetItemId,

    /// Owning project
    pub project_id: ProjectId,

    /// Spending category
    pub category: BudgetCategory,

    /// Amount in the project's currency
    pub amount: f64,

    /// What the money is for
    pub description: String,

    /// Approval state
    pub approval: ApprovalStatus,
}

/// Spending categories. The health analyzer computes per-category
/// percentages against the project's single total budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    /// Recording, mixing, mastering
    Production,
    /// Ads, PR, playlist pitching
    Marketing,
    /// Photo/video shoots, design work
    ContentCreation,
    /// Distributor and aggregator fees
    Distribution,
    /// Registrations, legal, accounting
    Admin,
    /// Unallocated reserve
    Contingency,
}

impl BudgetCategory {
    /// All categories, in reporting order.
    pub const ALL: [BudgetCategory; 6] = [
        BudgetCategory::Production,
        BudgetCategory::Marketing,
        BudgetCategory::ContentCreation,
        BudgetCategory::Distribution,
        BudgetCategory::Admin,
        BudgetCategory::Contingency,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetCategory::Production => "production",
            BudgetCategory::Marketing => "marketing",
            BudgetCategory::ContentCreation => "content_creation",
            BudgetCategory::Distribution => "distribution",
            BudgetCategory::Admin => "admin",
            BudgetCategory::Contingency => "contingency",
        }
    }
}

impl std::fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(BudgetCategory::Production),
            "marketing" => Ok(BudgetCategory::Marketing),
            "content_creation" => Ok(BudgetCategory::ContentCreation),
            "distribution" => Ok(BudgetCategory::Distribution),
            "admin" => Ok(BudgetCategory::Admin),
            "contingency" => Ok(BudgetCategory::Contingency),
            other => Err(format!("unknown budget category: {}", other)),
        }
    }
}

/// Approval state of a budget item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Awaiting sign-off
    Pending,
    /// Approved for spend
    Approved,
    /// Rejected
    Rejected,
}
