//! RelMan CLI - music release tracking and readiness reporting.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use relman_core::{
    ApprovalStatus, BudgetCategory, BudgetItem, BudgetItemId, ContentItem, ContentItemId,
    ContentRequirement, ContentType, Milestone, MilestoneId, MilestoneStatus, Project, ProjectId,
    ReleaseType, TeaserPost, TeaserPostId,
};
use relman_readiness::{evaluate_quota, ReadinessService};
use relman_storage::{JsonStorage, Storage};
use tracing::Level;

#[derive(Parser)]
#[command(name = "relman")]
#[command(about = "Music release tracking and readiness", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a project
    AddProject {
        /// Release title
        name: String,
        /// Artist name
        artist: String,
        /// single | ep | album | mixtape
        #[arg(long, default_value = "single")]
        release_type: String,
        /// Total budget
        #[arg(long)]
        budget: f64,
        /// Release date (YYYY-MM-DD)
        #[arg(long)]
        release_date: String,
    },
    /// List projects
    Projects,
    /// Show project details
    Show {
        /// Project ID
        id: String,
    },
    /// Add a milestone to a project
    AddMilestone {
        /// Project ID
        project: String,
        /// Milestone name, e.g. "Mastering Complete"
        name: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,
        /// Whether an incomplete milestone holds up release clearance
        #[arg(long)]
        blocks_release: bool,
        /// Whether completion needs an attached proof
        #[arg(long)]
        proof_required: bool,
    },
    /// List milestones for a project
    Milestones {
        /// Project ID
        project: String,
    },
    /// Mark a milestone complete; refused while its content quota is unmet
    Complete {
        /// Milestone ID
        id: String,
    },
    /// Require a minimum content count before a milestone may complete
    Require {
        /// Milestone ID
        milestone: String,
        /// photo | video | audio | graphic | document
        content_type: String,
        /// Minimum number of items
        count: u32,
    },
    /// Record a captured content item
    AddContent {
        /// Project ID
        project: String,
        /// photo | video | audio | graphic | document
        content_type: String,
        /// Milestone the item was captured for
        #[arg(long)]
        milestone: Option<String>,
    },
    /// Record a budget line item
    AddBudget {
        /// Project ID
        project: String,
        /// production | marketing | content_creation | distribution | admin | contingency
        category: String,
        /// Amount
        amount: f64,
        /// What the money is for
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Budget health report
    Budget {
        /// Project ID
        project: String,
    },
    /// Record a teaser post
    AddTeaser {
        /// Project ID
        project: String,
        /// Platform, e.g. instagram
        platform: String,
        /// Post caption
        #[arg(long, default_value = "")]
        caption: String,
    },
    /// Deadline risk report
    Deadlines {
        /// Project ID
        project: String,
    },
    /// Full readiness report and clearance verdict
    Status {
        /// Project ID
        project: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    let storage_path = std::path::PathBuf::from(".relman");
    let mut storage = JsonStorage::new(&storage_path).await?;
    let today = Utc::now().date_naive();

    match cli.command {
        Commands::AddProject {
            name,
            artist,
            release_type,
            budget,
            release_date,
        } => {
            let project = Project {
                id: ProjectId::new(),
                name,
                artist,
                release_type: parse_release_type(&release_type)?,
                total_budget: budget,
                release_date: parse_date(&release_date)?,
                created_at: Utc::now(),
            };
            storage.save_project(&project).await?;
            println!("Added project: {} - {}", project.id, project.name);
        }
        Commands::Projects => {
            let projects = storage.list_projects().await?;
            println!("Projects ({})", projects.len());
            for project in projects {
                println!(
                    "  {} | {} - {} | {} | releases {}",
                    project.id,
                    project.artist,
                    project.name,
                    project.release_type.as_str(),
                    project.release_date,
                );
            }
        }
        Commands::Show { id } => {
            let project_id = parse_project_id(&id)?;
            let Some(project) = storage.load_project(project_id).await? else {
                println!("Project not found");
                return Ok(());
            };

            println!("Project: {}", project.id);
            println!("  Title: {}", project.name);
            println!("  Artist: {}", project.artist);
            println!("  Type: {}", project.release_type.as_str());
            println!("  Budget: {:.2}", project.total_budget);
            println!("  Release date: {}", project.release_date);

            let milestones = storage.list_milestones(project_id).await?;
            println!("  Milestones ({})", milestones.len());
            for m in milestones {
                println!(
                    "    {} | {} | due {} | {}{}",
                    m.id,
                    m.status.as_str(),
                    m.due_date,
                    m.name,
                    if m.blocks_release { " [blocks release]" } else { "" },
                );
            }
        }
        Commands::AddMilestone {
            project,
            name,
            due,
            blocks_release,
            proof_required,
        } => {
            let project_id = parse_project_id(&project)?;
            if storage.load_project(project_id).await?.is_none() {
                println!("Project not found");
                return Ok(());
            }
            let milestone = Milestone {
                id: MilestoneId::new(),
                project_id,
                name,
                due_date: parse_date(&due)?,
                status: MilestoneStatus::Pending,
                blocks_release,
                proof_required,
                completed_at: None,
                created_at: Utc::now(),
            };
            storage.save_milestone(&milestone).await?;
            println!("Added milestone: {} - {}", milestone.id, milestone.name);
        }
        Commands::Milestones { project } => {
            let project_id = parse_project_id(&project)?;
            let milestones = storage.list_milestones(project_id).await?;
            println!("Milestones ({})", milestones.len());
            for m in milestones {
                println!(
                    "  {} | {} | due {} | {}",
                    m.id,
                    m.status.as_str(),
                    m.due_date,
                    m.name,
                );
            }
        }
        Commands::Complete { id } => {
            let milestone_id: MilestoneId = id
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid milestone ID"))?;
            let Some(mut milestone) = storage.load_milestone(milestone_id).await? else {
                println!("Milestone not found");
                return Ok(());
            };

            let requirements = storage.list_content_requirements(milestone_id).await?;
            let counts = storage.content_counts_for_milestone(milestone_id).await?;
            let quota = evaluate_quota(milestone_id, &requirements, &counts);

            if !quota.quota_met {
                println!("Cannot complete '{}': content quota not met", milestone.name);
                for r in quota.requirements.iter().filter(|r| !r.met) {
                    println!(
                        "  {}: {}/{} captured, {} missing",
                        r.content_type, r.actual, r.required, r.missing,
                    );
                }
                return Ok(());
            }

            milestone.status = MilestoneStatus::Complete;
            milestone.completed_at = Some(Utc::now());
            storage.save_milestone(&milestone).await?;
            println!("Completed milestone: {}", milestone.name);
        }
        Commands::Require {
            milestone,
            content_type,
            count,
        } => {
            let milestone_id: MilestoneId = milestone
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid milestone ID"))?;
            if storage.load_milestone(milestone_id).await?.is_none() {
                println!("Milestone not found");
                return Ok(());
            }
            let content_type: ContentType = content_type
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            storage
                .save_content_requirement(&ContentRequirement {
                    milestone_id,
                    content_type,
                    minimum_count: count,
                })
                .await?;
            println!("Requirement set: {} x{}", content_type, count);
        }
        Commands::AddContent {
            project,
            content_type,
            milestone,
        } => {
            let project_id = parse_project_id(&project)?;
            let milestone_id = match milestone {
                Some(id) => Some(
                    id.parse::<MilestoneId>()
                        .map_err(|_| anyhow::anyhow!("Invalid milestone ID"))?,
                ),
                None => None,
            };
            let item = ContentItem {
                id: ContentItemId::new(),
                project_id,
                milestone_id,
                content_type: content_type
                    .parse()
                    .map_err(|e: String| anyhow::anyhow!(e))?,
                created_at: Utc::now(),
            };
            storage.save_content_item(&item).await?;
            println!("Recorded {} item: {}", item.content_type, item.id);
        }
        Commands::AddBudget {
            project,
            category,
            amount,
            description,
        } => {
            let project_id = parse_project_id(&project)?;
            let item = BudgetItem {
                id: BudgetItemId::new(),
                project_id,
                category: category
                    .parse::<BudgetCategory>()
                    .map_err(|e| anyhow::anyhow!(e))?,
                amount,
                description,
                approval: ApprovalStatus::Pending,
            };
            storage.save_budget_item(&item).await?;
            println!("Recorded {} spend: {:.2}", item.category, item.amount);
        }
        Commands::Budget { project } => {
            let project_id = parse_project_id(&project)?;
            let service = ReadinessService::new(storage);
            let (summary, alerts) = service.budget_report(project_id, today).await?;

            println!(
                "Budget: {:.2} spent of {:.2} ({:.1}%), {:.2} remaining",
                summary.total_spent,
                summary.total_budget,
                summary.percentage_spent,
                summary.remaining,
            );
            for health in &summary.categories {
                println!(
                    "  {:<17} {:>10.2} / {:>10.2} recommended | {:>6.1}% | {:?}",
                    health.category.as_str(),
                    health.spent,
                    health.recommended_amount,
                    health.percent_of_recommended,
                    health.status,
                );
            }
            for alert in &alerts {
                println!(
                    "  ALERT [{:?}] {:?} {}: spent {:.2} vs {:.2}",
                    alert.severity,
                    alert.kind,
                    alert.category,
                    alert.spent,
                    alert.recommended_amount,
                );
            }
        }
        Commands::AddTeaser {
            project,
            platform,
            caption,
        } => {
            let project_id = parse_project_id(&project)?;
            let post = TeaserPost {
                id: TeaserPostId::new(),
                project_id,
                platform,
                caption,
                posted_at: Utc::now(),
            };
            storage.save_teaser_post(&post).await?;
            println!("Recorded teaser on {}", post.platform);
        }
        Commands::Deadlines { project } => {
            let project_id = parse_project_id(&project)?;
            let service = ReadinessService::new(storage);
            let analysis = service.deadline_report(project_id, today).await?;

            println!(
                "Deadline risk: {} ({} days to release)",
                analysis.overall_risk.as_str(),
                analysis.total_days_to_release,
            );
            for rec in &analysis.milestones {
                println!(
                    "  {:<30} due {} | recommended {} | {:+} days | {}{}",
                    rec.name,
                    rec.actual_date,
                    rec.recommended_date,
                    rec.days_difference,
                    rec.risk.as_str(),
                    if rec.is_critical { " [critical]" } else { "" },
                );
            }
        }
        Commands::Status { project } => {
            let project_id = parse_project_id(&project)?;
            let service = ReadinessService::new(storage);
            let report = service.report(project_id, today).await?;

            println!(
                "Readiness: {}",
                if report.verdict.cleared {
                    "CLEARED FOR RELEASE"
                } else {
                    "NOT CLEARED"
                }
            );
            println!(
                "  Deadline risk: {} | teasers: {}/{} | budget spent: {:.1}%",
                report.deadlines.overall_risk.as_str(),
                report.teaser.actual,
                report.teaser.required,
                report.budget.percentage_spent,
            );
            println!(
                "  Optimal teaser window: {} to {}",
                report.posting_window.start, report.posting_window.end,
            );

            let missing = &report.verdict.missing;
            for (group, reasons) in [
                ("milestones", &missing.milestones),
                ("budget", &missing.budget),
                ("files", &missing.files),
                ("legal", &missing.legal),
            ] {
                for reason in reasons {
                    println!("  [{}] {}", group, reason);
                }
            }
        }
    }

    Ok(())
}

fn parse_project_id(s: &str) -> Result<ProjectId> {
    s.parse().map_err(|_| anyhow::anyhow!("Invalid project ID"))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", s))
}

fn parse_release_type(s: &str) -> Result<ReleaseType> {
    match s.to_lowercase().as_str() {
        "single" => Ok(ReleaseType::Single),
        "ep" => Ok(ReleaseType::Ep),
        "album" => Ok(ReleaseType::Album),
        "mixtape" => Ok(ReleaseType::Mixtape),
        other => Err(anyhow::anyhow!("unknown release type: {}", other)),
    }
}
