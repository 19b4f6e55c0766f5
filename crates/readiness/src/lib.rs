//! Release readiness and compliance engine.
//!
//! Decides whether a music-release project is cleared for release. Four
//! leaf evaluators (content quotas, budget health, deadline risk, teaser
//! compliance) feed an aggregator that produces the final verdict. Every
//! evaluator is a pure function over an explicit input snapshot; all
//! thresholds live in immutable tables. Persistence access is isolated in
//! [`service::ReadinessService`], which fetches the snapshot and never
//! leaks I/O into the evaluators.

#![warn(missing_docs)]

pub mod budget;
pub mod clearance;
pub mod deadline;
pub mod quota;
pub mod service;
pub mod teaser;

pub use budget::{
    analyze_budget, generate_budget_alerts, AlertKind, AlertSeverity, BudgetAlert, BudgetStatus,
    BudgetSummary, CategoryHealth,
};
pub use clearance::{compute_clearance, MissingRequirements, ReadinessVerdict};
pub use deadline::{
    analyze_deadlines, buffer_days, DeadlineAnalysis, DeadlineRecommendation, RiskLevel,
};
pub use quota::{evaluate_quota, QuotaStatus, RequirementStatus};
pub use service::{EngineError, ReadinessReport, ReadinessService};
pub use teaser::{check_teaser_requirement, optimal_posting_window, PostingWindow, TeaserStatus};
