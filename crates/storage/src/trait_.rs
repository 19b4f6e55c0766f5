//! Storage trait abstraction.

use async_trait::async_trait;
use relman_core::{
    BudgetCategory, BudgetItem, BudgetItemId, ContentItem, ContentItemId, ContentRequirement,
    ContentType, Milestone, MilestoneId, Project, ProjectId, TeaserPost,
};
use std::collections::HashMap;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage abstraction for RelMan data.
///
/// This trait allows different storage backends to be plugged in. Loads
/// return `Ok(None)` for absent records; listing for an unknown project
/// returns empty collections — the project load is the existence check.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Project operations ===

    /// Save a project (create or update).
    async fn save_project(&mut self, project: &Project) -> Result<()>;

    /// Load a project by ID.
    async fn load_project(&self, id: ProjectId) -> Result<Option<Project>>;

    /// List all projects.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Delete a project.
    async fn delete_project(&mut self, id: ProjectId) -> Result<()>;

    // === Milestone operations ===

    /// Save a milestone.
    async fn save_milestone(&mut self, milestone: &Milestone) -> Result<()>;

    /// Load a milestone by ID.
    async fn load_milestone(&self, id: MilestoneId) -> Result<Option<Milestone>>;

    /// List milestones for a project, ordered by due date.
    async fn list_milestones(&self, project_id: ProjectId) -> Result<Vec<Milestone>>;

    // === Content requirement operations ===

    /// Save a content requirement row.
    async fn save_content_requirement(&mut self, requirement: &ContentRequirement) -> Result<()>;

    /// List requirement rows for a milestone.
    async fn list_content_requirements(
        &self,
        milestone_id: MilestoneId,
    ) -> Result<Vec<ContentRequirement>>;

    // === Content item operations ===

    /// Save a content item.
    async fn save_content_item(&mut self, item: &ContentItem) -> Result<()>;

    /// Load a content item by ID.
    async fn load_content_item(&self, id: ContentItemId) -> Result<Option<ContentItem>>;

    /// List content items for a project.
    async fn list_content_items(&self, project_id: ProjectId) -> Result<Vec<ContentItem>>;

    /// Count content items tagged to a milestone, grouped by type.
    async fn content_counts_for_milestone(
        &self,
        milestone_id: MilestoneId,
    ) -> Result<HashMap<ContentType, u32>>;

    // === Budget operations ===

    /// Save a budget item.
    async fn save_budget_item(&mut self, item: &BudgetItem) -> Result<()>;

    /// Load a budget item by ID.
    async fn load_budget_item(&self, id: BudgetItemId) -> Result<Option<BudgetItem>>;

    /// List budget items for a project.
    async fn list_budget_items(&self, project_id: ProjectId) -> Result<Vec<BudgetItem>>;

    /// Sum budget item amounts for a project, grouped by category.
    async fn budget_by_category(
        &self,
        project_id: ProjectId,
    ) -> Result<HashMap<BudgetCategory, f64>>;

    // === Teaser operations ===

    /// Save a teaser post.
    async fn save_teaser_post(&mut self, post: &TeaserPost) -> Result<()>;

    /// List teaser posts for a project, ordered by post time.
    async fn list_teaser_posts(&self, project_id: ProjectId) -> Result<Vec<TeaserPost>>;

    /// Count teaser posts for a project.
    async fn teaser_count(&self, project_id: ProjectId) -> Result<u32>;
}
