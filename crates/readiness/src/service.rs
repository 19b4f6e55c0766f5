//! Storage-backed readiness evaluation service.
//!
//! The service is the only place the engine touches persistence: it
//! fetches a full input snapshot for a project, validates it, and runs
//! the pure evaluators over it. Concurrent evaluations never share
//! state; two calls with the same snapshot produce identical reports.

use crate::budget::{analyze_budget, generate_budget_alerts, BudgetAlert, BudgetSummary};
use crate::clearance::{compute_clearance, ReadinessVerdict};
use crate::deadline::{analyze_deadlines, DeadlineAnalysis};
use crate::quota::{evaluate_quota, QuotaStatus};
use crate::teaser::{check_teaser_requirement, optimal_posting_window, PostingWindow, TeaserStatus};
use chrono::NaiveDate;
use relman_core::{Milestone, MilestoneId, Project, ProjectId, Time};
use relman_storage::{Storage, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Errors the evaluation service can signal.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Referenced project or milestone does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Snapshot violates the engine's input contract
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Full readiness report for one project, computed from one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    /// Project evaluated
    pub project_id: ProjectId,

    /// When the report was computed
    pub generated_at: Time,

    /// Quota standing per milestone, in due-date order
    pub quotas: Vec<QuotaStatus>,

    /// Budget health
    pub budget: BudgetSummary,

    /// Budget alerts
    pub alerts: Vec<BudgetAlert>,

    /// Deadline risk
    pub deadlines: DeadlineAnalysis,

    /// Teaser compliance
    pub teaser: TeaserStatus,

    /// Advisory teaser posting window
    pub posting_window: PostingWindow,

    /// The aggregate verdict
    pub verdict: ReadinessVerdict,
}

/// Readiness evaluation service.
pub struct ReadinessService<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> ReadinessService<S> {
    /// Create a new service over a storage backend.
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// Compute the full readiness report for a project.
    ///
    /// `today` is the caller's reference date for days-to-release math,
    /// kept explicit so the same snapshot always yields the same report.
    pub async fn report(
        &self,
        project_id: ProjectId,
        today: NaiveDate,
    ) -> Result<ReadinessReport, EngineError> {
        let project = self.load_project(project_id).await?;
        tracing::debug!(project = %project_id, "computing readiness report");

        let milestones = self.storage.list_milestones(project_id).await?;

        let mut quotas = Vec::with_capacity(milestones.len());
        let mut quota_map = HashMap::with_capacity(milestones.len());
        for milestone in &milestones {
            let quota = self.quota_for(milestone).await?;
            quota_map.insert(milestone.id, quota.clone());
            quotas.push(quota);
        }

        let (budget, alerts) = self.budget_for(&project, today).await?;
        let deadlines = analyze_deadlines(&milestones, project.release_date, today);

        let teaser_count = self.storage.teaser_count(project_id).await?;
        let teaser = check_teaser_requirement(teaser_count);
        let posting_window = optimal_posting_window(project.release_date);

        let verdict = compute_clearance(&milestones, &quota_map, &alerts, &teaser);

        Ok(ReadinessReport {
            project_id,
            generated_at: chrono::Utc::now(),
            quotas,
            budget,
            alerts,
            deadlines,
            teaser,
            posting_window,
            verdict,
        })
    }

    /// Verdict-only convenience over [`Self::report`].
    pub async fn clearance(
        &self,
        project_id: ProjectId,
        today: NaiveDate,
    ) -> Result<ReadinessVerdict, EngineError> {
        Ok(self.report(project_id, today).await?.verdict)
    }

    /// Quota standing for one milestone.
    ///
    /// This is the gate a completion action consults before flipping a
    /// milestone to complete; the engine itself never flips status.
    pub async fn milestone_quota(
        &self,
        milestone_id: MilestoneId,
    ) -> Result<QuotaStatus, EngineError> {
        let milestone = self
            .storage
            .load_milestone(milestone_id)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("milestone {}", milestone_id)))?;
        self.quota_for(&milestone).await
    }

    /// Budget summary and alerts for a project.
    pub async fn budget_report(
        &self,
        project_id: ProjectId,
        today: NaiveDate,
    ) -> Result<(BudgetSummary, Vec<BudgetAlert>), EngineError> {
        let project = self.load_project(project_id).await?;
        self.budget_for(&project, today).await
    }

    /// Deadline risk analysis for a project.
    pub async fn deadline_report(
        &self,
        project_id: ProjectId,
        today: NaiveDate,
    ) -> Result<DeadlineAnalysis, EngineError> {
        let project = self.load_project(project_id).await?;
        let milestones = self.storage.list_milestones(project_id).await?;
        Ok(analyze_deadlines(&milestones, project.release_date, today))
    }

    /// Teaser compliance for a project.
    pub async fn teaser_report(
        &self,
        project_id: ProjectId,
    ) -> Result<(TeaserStatus, PostingWindow), EngineError> {
        let project = self.load_project(project_id).await?;
        let count = self.storage.teaser_count(project_id).await?;
        Ok((
            check_teaser_requirement(count),
            optimal_posting_window(project.release_date),
        ))
    }

    async fn load_project(&self, project_id: ProjectId) -> Result<Project, EngineError> {
        let project = self
            .storage
            .load_project(project_id)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("project {}", project_id)))?;

        if project.total_budget < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "negative total budget: {}",
                project.total_budget
            )));
        }
        Ok(project)
    }

    async fn quota_for(&self, milestone: &Milestone) -> Result<QuotaStatus, EngineError> {
        let requirements = self
            .storage
            .list_content_requirements(milestone.id)
            .await?;
        let counts = self
            .storage
            .content_counts_for_milestone(milestone.id)
            .await?;
        Ok(evaluate_quota(milestone.id, &requirements, &counts))
    }

    async fn budget_for(
        &self,
        project: &Project,
        today: NaiveDate,
    ) -> Result<(BudgetSummary, Vec<BudgetAlert>), EngineError> {
        let spend = self.storage.budget_by_category(project.id).await?;
        for (category, amount) in &spend {
            if *amount < 0.0 {
                return Err(EngineError::InvalidInput(format!(
                    "negative spend for {}: {}",
                    category, amount
                )));
            }
        }

        let summary = analyze_budget(project.total_budget, &spend);
        let days_until_release = (project.release_date - today).num_days();
        let alerts = generate_budget_alerts(&summary, days_until_release);
        Ok((summary, alerts))
    }
}
