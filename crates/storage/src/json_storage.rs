//! JSON file storage implementation.
//!
//! Stores data as JSON files in a `.relman` directory, one file per
//! entity. Content requirements are keyed by milestone and content type
//! since they have no id of their own.

use super::{Result, Storage, StorageError};
use relman_core::{
    BudgetCategory, BudgetItem, BudgetItemId, ContentItem, ContentItemId, ContentRequirement,
    ContentType, Milestone, MilestoneId, Project, ProjectId, TeaserPost,
};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: std::path::PathBuf,
}

impl JsonStorage {
    /// Create storage. This will create the subdirectories needed under
    /// the given root (conventionally `.relman/`).
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("projects")).await?;
        fs::create_dir_all(root.join("milestones")).await?;
        fs::create_dir_all(root.join("requirements")).await?;
        fs::create_dir_all(root.join("content")).await?;
        fs::create_dir_all(root.join("budget")).await?;
        fs::create_dir_all(root.join("teasers")).await?;

        Ok(Self { root })
    }

    fn project_path(&self, id: ProjectId) -> std::path::PathBuf {
        self.root.join("projects").join(format!("{}.json", id))
    }
    fn milestone_path(&self, id: MilestoneId) -> std::path::PathBuf {
        self.root.join("milestones").join(format!("{}.json", id))
    }
    fn requirement_path(&self, milestone_id: MilestoneId, content_type: ContentType) -> std::path::PathBuf {
        self.root
            .join("requirements")
            .join(format!("{}-{}.json", milestone_id, content_type.as_str()))
    }
    fn content_path(&self, id: ContentItemId) -> std::path::PathBuf {
        self.root.join("content").join(format!("{}.json", id))
    }
    fn budget_path(&self, id: BudgetItemId) -> std::path::PathBuf {
        self.root.join("budget").join(format!("{}.json", id))
    }
    fn teaser_path(&self, id: relman_core::TeaserPostId) -> std::path::PathBuf {
        self.root.join("teasers").join(format!("{}.json", id))
    }

    async fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json.as_bytes()).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn save_project(&mut self, project: &Project) -> Result<()> {
        tracing::debug!(project = %project.id, "saving project");
        self.write_json(&self.project_path(project.id), project).await
    }

    async fn load_project(&self, id: ProjectId) -> Result<Option<Project>> {
        read_json(&self.project_path(id)).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = list_dir(&self.root.join("projects")).await?;
        projects.sort_by(|a, b| a.release_date.cmp(&b.release_date));
        Ok(projects)
    }

    async fn delete_project(&mut self, id: ProjectId) -> Result<()> {
        fs::remove_file(self.project_path(id)).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Ok(())
            } else {
                Err(e)
            }
        })?;
        Ok(())
    }

    async fn save_milestone(&mut self, milestone: &Milestone) -> Result<()> {
        self.write_json(&self.milestone_path(milestone.id), milestone).await
    }

    async fn load_milestone(&self, id: MilestoneId) -> Result<Option<Milestone>> {
        read_json(&self.milestone_path(id)).await
    }

    async fn list_milestones(&self, project_id: ProjectId) -> Result<Vec<Milestone>> {
        let all: Vec<Milestone> = list_dir(&self.root.join("milestones")).await?;
        let mut milestones: Vec<Milestone> = all
            .into_iter()
            .filter(|m| m.project_id == project_id)
            .collect();
        milestones.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        Ok(milestones)
    }

    async fn save_content_requirement(&mut self, requirement: &ContentRequirement) -> Result<()> {
        let path = self.requirement_path(requirement.milestone_id, requirement.content_type);
        self.write_json(&path, requirement).await
    }

    async fn list_content_requirements(
        &self,
        milestone_id: MilestoneId,
    ) -> Result<Vec<ContentRequirement>> {
        let all: Vec<ContentRequirement> = list_dir(&self.root.join("requirements")).await?;
        Ok(all
            .into_iter()
            .filter(|r| r.milestone_id == milestone_id)
            .collect())
    }

    async fn save_content_item(&mut self, item: &ContentItem) -> Result<()> {
        self.write_json(&self.content_path(item.id), item).await
    }

    async fn load_content_item(&self, id: ContentItemId) -> Result<Option<ContentItem>> {
        read_json(&self.content_path(id)).await
    }

    async fn list_content_items(&self, project_id: ProjectId) -> Result<Vec<ContentItem>> {
        let all: Vec<ContentItem> = list_dir(&self.root.join("content")).await?;
        Ok(all
            .into_iter()
            .filter(|c| c.project_id == project_id)
            .collect())
    }

    async fn content_counts_for_milestone(
        &self,
        milestone_id: MilestoneId,
    ) -> Result<HashMap<ContentType, u32>> {
        let all: Vec<ContentItem> = list_dir(&self.root.join("content")).await?;
        let mut counts = HashMap::new();
        for item in all {
            if item.milestone_id == Some(milestone_id) {
                *counts.entry(item.content_type).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn save_budget_item(&mut self, item: &BudgetItem) -> Result<()> {
        self.write_json(&self.budget_path(item.id), item).await
    }

    async fn load_budget_item(&self, id: BudgetItemId) -> Result<Option<BudgetItem>> {
        read_json(&self.budget_path(id)).await
    }

    async fn list_budget_items(&self, project_id: ProjectId) -> Result<Vec<BudgetItem>> {
        let all: Vec<BudgetItem> = list_dir(&self.root.join("budget")).await?;
        Ok(all
            .into_iter()
            .filter(|b| b.project_id == project_id)
            .collect())
    }

    async fn budget_by_category(
        &self,
        project_id: ProjectId,
    ) -> Result<HashMap<BudgetCategory, f64>> {
        let items = self.list_budget_items(project_id).await?;
        let mut totals = HashMap::new();
        for item in items {
            *totals.entry(item.category).or_insert(0.0) += item.amount;
        }
        Ok(totals)
    }

    async fn save_teaser_post(&mut self, post: &TeaserPost) -> Result<()> {
        self.write_json(&self.teaser_path(post.id), post).await
    }

    async fn list_teaser_posts(&self, project_id: ProjectId) -> Result<Vec<TeaserPost>> {
        let all: Vec<TeaserPost> = list_dir(&self.root.join("teasers")).await?;
        let mut posts: Vec<TeaserPost> = all
            .into_iter()
            .filter(|t| t.project_id == project_id)
            .collect();
        posts.sort_by(|a, b| a.posted_at.cmp(&b.posted_at));
        Ok(posts)
    }

    async fn teaser_count(&self, project_id: ProjectId) -> Result<u32> {
        Ok(self.list_teaser_posts(project_id).await?.len() as u32)
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn list_dir<T: serde::de::DeserializeOwned>(dir: &std::path::Path) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        if let Ok(Some(item)) = read_json(&entry.path()).await {
            items.push(item);
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use relman_core::{ApprovalStatus, MilestoneStatus, ReleaseType, TeaserPostId};

    fn test_project() -> Project {
        Project {
            id: ProjectId::new(),
            name: "Midnight Static".to_string(),
            artist: "The Wire Frames".to_string(),
            release_type: ReleaseType::Album,
            total_budget: 100_000.0,
            release_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn test_milestone(project_id: ProjectId, name: &str) -> Milestone {
        Milestone {
            id: MilestoneId::new(),
            project_id,
            name: name.to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            status: MilestoneStatus::Pending,
            blocks_release: true,
            proof_required: false,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn project_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let project = test_project();
        storage.save_project(&project).await.unwrap();

        let loaded = storage.load_project(project.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "Midnight Static");
        assert_eq!(loaded.total_budget, 100_000.0);

        assert!(storage
            .load_project(ProjectId::new())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn list_milestones_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let project = test_project();
        let other = test_project();

        let mut early = test_milestone(project.id, "Recording Complete");
        early.due_date = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
        let mut late = test_milestone(project.id, "Upload to Distributor");
        late.due_date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let unrelated = test_milestone(other.id, "Mixing Complete");

        storage.save_milestone(&late).await.unwrap();
        storage.save_milestone(&early).await.unwrap();
        storage.save_milestone(&unrelated).await.unwrap();

        let milestones = storage.list_milestones(project.id).await.unwrap();
        assert_eq!(milestones.len(), 2);
        assert_eq!(milestones[0].name, "Recording Complete");
        assert_eq!(milestones[1].name, "Upload to Distributor");
    }

    #[tokio::test]
    async fn content_counts_group_by_type() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let project = test_project();
        let milestone = test_milestone(project.id, "Recording Complete");

        for content_type in [ContentType::Photo, ContentType::Photo, ContentType::Video] {
            storage
                .save_content_item(&ContentItem {
                    id: ContentItemId::new(),
                    project_id: project.id,
                    milestone_id: Some(milestone.id),
                    content_type,
                    created_at: Utc::now(),
                })
                .await
                .unwrap();
        }
        // Untagged item must not count toward the milestone
        storage
            .save_content_item(&ContentItem {
                id: ContentItemId::new(),
                project_id: project.id,
                milestone_id: None,
                content_type: ContentType::Photo,
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        let counts = storage
            .content_counts_for_milestone(milestone.id)
            .await
            .unwrap();
        assert_eq!(counts.get(&ContentType::Photo), Some(&2));
        assert_eq!(counts.get(&ContentType::Video), Some(&1));
        assert_eq!(counts.get(&ContentType::Audio), None);
    }

    #[tokio::test]
    async fn budget_totals_by_category() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let project = test_project();
        for (category, amount) in [
            (BudgetCategory::Production, 12_000.0),
            (BudgetCategory::Production, 8_000.0),
            (BudgetCategory::Marketing, 5_000.0),
        ] {
            storage
                .save_budget_item(&BudgetItem {
                    id: BudgetItemId::new(),
                    project_id: project.id,
                    category,
                    amount,
                    description: "studio".to_string(),
                    approval: ApprovalStatus::Approved,
                })
                .await
                .unwrap();
        }

        let totals = storage.budget_by_category(project.id).await.unwrap();
        assert_eq!(totals.get(&BudgetCategory::Production), Some(&20_000.0));
        assert_eq!(totals.get(&BudgetCategory::Marketing), Some(&5_000.0));
    }

    #[tokio::test]
    async fn teaser_count_per_project() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let project = test_project();
        for platform in ["instagram", "tiktok"] {
            storage
                .save_teaser_post(&TeaserPost {
                    id: TeaserPostId::new(),
                    project_id: project.id,
                    platform: platform.to_string(),
                    caption: "something is coming".to_string(),
                    posted_at: Utc::now(),
                })
                .await
                .unwrap();
        }

        assert_eq!(storage.teaser_count(project.id).await.unwrap(), 2);
        assert_eq!(storage.teaser_count(ProjectId::new()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn requirement_upsert_by_milestone_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let milestone_id = MilestoneId::new();
        let requirement = ContentRequirement {
            milestone_id,
            content_type: ContentType::Photo,
            minimum_count: 3,
        };
        storage.save_content_requirement(&requirement).await.unwrap();

        // Saving again for the same (milestone, type) replaces, not duplicates
        let updated = ContentRequirement {
            minimum_count: 5,
            ..requirement
        };
        storage.save_content_requirement(&updated).await.unwrap();

        let rows = storage.list_content_requirements(milestone_id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].minimum_count, 5);
    }
}
