//! Remediation planning.
//!
//! Splits the failing criteria of the blocking level into items that can
//! be scaffolded (missing hygiene files created from templates) and items
//! that need manual engineering work. Planning is read-only: file
//! operations are described, never performed.

use serde::Serialize;
use tracing::warn;

use crate::catalog::Pillar;
use crate::config::RepoConfig;
use crate::evidence::{AppKind, Application};
use crate::recommend::{ActionItem, Disposition};
use crate::scorecard::Scorecard;

/// Number of items a plan holds unless told otherwise.
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Owner written into a suggested CODEOWNERS when none is configured.
pub const PLACEHOLDER_OWNER: &str = "your-org/maintainers";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
    CreateIfMissing,
}

/// A file the plan would create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOp {
    pub path: String,
    pub action: FileAction,
    pub reason: &'static str,
    /// The file is already present, so the operation would be a no-op.
    pub already_exists: bool,
    /// Suggested content for files generated from repository facts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemediationItem {
    pub criterion_id: String,
    pub title: String,
    pub pillar: Pillar,
    pub level: u8,
    pub disposition: Disposition,
    pub description: String,
    pub file_ops: Vec<FileOp>,
    pub manual_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemediationPlan {
    pub repo_name: String,
    pub level_achieved: u8,
    pub blocking_level: Option<u8>,
    pub target_level: Option<u8>,
    pub items: Vec<RemediationItem>,
}

impl RemediationPlan {
    pub fn auto_scaffold_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.disposition == Disposition::AutoScaffold)
            .count()
    }

    pub fn manual_count(&self) -> usize {
        self.items.len() - self.auto_scaffold_count()
    }

    /// File operations that would actually create something.
    pub fn pending_files(&self) -> impl Iterator<Item = &FileOp> {
        self.items
            .iter()
            .flat_map(|i| i.file_ops.iter())
            .filter(|op| !op.already_exists)
    }
}

struct Guidance {
    description: &'static str,
    steps: &'static [&'static str],
}

fn guidance(id: &str) -> Option<Guidance> {
    let (description, steps): (&'static str, &'static [&'static str]) = match id {
        "readme" => (
            "Add a README as the canonical entry point (purpose, quickstart, links).",
            &["Fill README.md with real setup and run commands and a short repository overview."],
        ),
        "gitignore" => (
            "Add or extend .gitignore so secrets and build artifacts stay out of commits.",
            &["Review .gitignore and tune it for repository-specific tooling."],
        ),
        "agents_md" => (
            "Add AGENTS.md as a single source of truth for commands, loops and expectations.",
            &[],
        ),
        "contributing" => (
            "Add CONTRIBUTING.md to make the change flow and review expectations explicit.",
            &[],
        ),
        "pre_commit_hooks" | "large_file_detection" => (
            "Add pre-commit hooks to catch avoidable CI failures and accidental large files.",
            &["Mirror pre-commit hook repositories internally if outbound network access is restricted."],
        ),
        "codeowners" => (
            "Add CODEOWNERS to make ownership explicit and route reviews.",
            &[],
        ),
        "pr_template" => (
            "Add a PR template so risk and verification evidence are captured consistently.",
            &[],
        ),
        "issue_templates" => (
            "Add issue templates so issues arrive with enough context to act on.",
            &[],
        ),
        "devcontainer" => (
            "Add a devcontainer so every contributor gets the same toolchain.",
            &["Add the language runtimes and tools the repository needs to devcontainer.json."],
        ),
        "env_template" => (
            "Add an environment template so runtime configuration is never guessed.",
            &["List required environment variables in .env.example with safe defaults and no secrets."],
        ),
        "dependabot" => (
            "Enable automated dependency update PRs for every discovered ecosystem.",
            &[],
        ),
        "secret_scanning_tooling" => (
            "Add a secret scanning baseline configuration.",
            &["Run the secret scanner on every PR, in CI or an internal pipeline."],
        ),
        "security_policy" => (
            "Add SECURITY.md so vulnerabilities are reported through a private channel.",
            &["Replace the contact channels in SECURITY.md with your organisation's."],
        ),
        _ => return None,
    };
    Some(Guidance { description, steps })
}

fn file_reason(path: &str) -> &'static str {
    match path {
        "README.md" => "Canonical entry point for humans and agents.",
        ".gitignore" => "Keeps secrets and build artifacts out of commits.",
        "AGENTS.md" => "Agent-facing development instructions.",
        "CONTRIBUTING.md" => "Contribution and PR expectations.",
        ".pre-commit-config.yaml" => "Local automation and large-file detection.",
        ".github/CODEOWNERS" => "Routes reviews and approvals to owners.",
        ".github/pull_request_template.md" => "Consistent PR context and verification evidence.",
        ".github/ISSUE_TEMPLATE/bug_report.md" => "Bugs reported with reproducible steps.",
        ".github/ISSUE_TEMPLATE/feature_request.md" => "Features proposed with acceptance criteria.",
        ".github/ISSUE_TEMPLATE/incident_followup.md" => "Incident follow-ups tracked with action items.",
        ".github/ISSUE_TEMPLATE/config.yml" => "Routes security reports away from public trackers.",
        ".devcontainer/devcontainer.json" => "Reproducible development environment.",
        ".env.example" => "Documents environment variables without secrets.",
        ".github/dependabot.yml" => "Automated dependency update PRs.",
        ".gitleaks.toml" => "Baseline secret scanning configuration.",
        "SECURITY.md" => "Security reporting channel and policy.",
        _ => "Scaffolded hygiene file.",
    }
}

/// Owner handle for CODEOWNERS, without a leading `@`.
pub fn default_owner(config: &RepoConfig) -> &str {
    config
        .default_codeowner
        .as_deref()
        .map(|o| o.trim().trim_start_matches('@'))
        .filter(|o| !o.is_empty())
        .unwrap_or(PLACEHOLDER_OWNER)
}

#[derive(Serialize)]
struct DependabotConfig {
    version: u8,
    updates: Vec<DependabotUpdate>,
}

#[derive(Serialize)]
struct DependabotUpdate {
    #[serde(rename = "package-ecosystem")]
    package_ecosystem: &'static str,
    directory: String,
    schedule: DependabotSchedule,
}

#[derive(Serialize)]
struct DependabotSchedule {
    interval: &'static str,
}

fn ecosystem(kind: AppKind) -> Option<&'static str> {
    match kind {
        AppKind::Node => Some("npm"),
        AppKind::Python => Some("pip"),
        AppKind::Go => Some("gomod"),
        AppKind::Rust => Some("cargo"),
        AppKind::Java => Some("maven"),
        AppKind::Dotnet => Some("nuget"),
        AppKind::Unknown => None,
    }
}

/// Dependabot configuration covering GitHub Actions plus one weekly entry
/// per application ecosystem.
pub fn dependabot_yaml(apps: &[Application]) -> serde_yaml::Result<String> {
    let weekly = || DependabotSchedule { interval: "weekly" };
    let mut updates = vec![DependabotUpdate {
        package_ecosystem: "github-actions",
        directory: "/".to_string(),
        schedule: weekly(),
    }];
    for app in apps {
        let Some(eco) = ecosystem(app.kind) else {
            continue;
        };
        let directory = if app.path == "." {
            "/".to_string()
        } else {
            format!("/{}", app.path)
        };
        if updates
            .iter()
            .any(|u| u.package_ecosystem == eco && u.directory == directory)
        {
            continue;
        }
        updates.push(DependabotUpdate {
            package_ecosystem: eco,
            directory,
            schedule: weekly(),
        });
    }
    serde_yaml::to_string(&DependabotConfig { version: 2, updates })
}

fn generated_content(path: &str, card: &Scorecard, owner: &str) -> Option<String> {
    match path {
        ".github/CODEOWNERS" => Some(format!("* @{}\n", owner)),
        ".github/dependabot.yml" => match dependabot_yaml(&card.apps) {
            Ok(yaml) => Some(yaml),
            Err(e) => {
                warn!(error = %e, "could not render dependabot config");
                None
            }
        },
        _ => None,
    }
}

fn plan_item(action: &ActionItem, card: &Scorecard, config: &RepoConfig) -> RemediationItem {
    let owner = default_owner(config);
    let file_ops: Vec<FileOp> = action
        .scaffold_files
        .iter()
        .map(|file| FileOp {
            path: file.path.clone(),
            action: FileAction::CreateIfMissing,
            reason: file_reason(&file.path),
            already_exists: file.exists,
            content: generated_content(&file.path, card, owner),
        })
        .collect();

    let mut steps: Vec<String> = action
        .unmet_prerequisites
        .iter()
        .map(|req| format!("Resolve prerequisite `{}` first.", req))
        .collect();

    let all_present = !file_ops.is_empty() && action.disposition == Disposition::Manual;
    let (disposition, description) = match (action.disposition, guidance(&action.criterion_id)) {
        (Disposition::AutoScaffold, Some(g)) => {
            steps.extend(g.steps.iter().map(|s| s.to_string()));
            if action.criterion_id == "codeowners" {
                if owner == PLACEHOLDER_OWNER {
                    steps.push(
                        "Replace placeholder owners in .github/CODEOWNERS with real users or teams."
                            .to_string(),
                    );
                } else {
                    steps.push(format!("Confirm @{} should own every path.", owner));
                }
            }
            (Disposition::AutoScaffold, g.description.to_string())
        }
        _ => {
            if all_present {
                let existing: Vec<&str> = file_ops.iter().map(|op| op.path.as_str()).collect();
                steps.push(format!("Update the existing {}.", existing.join(", ")));
            }
            steps.push(action.remediation.clone());
            (
                Disposition::Manual,
                "Not auto-scaffoldable; needs repository-specific engineering work.".to_string(),
            )
        }
    };

    RemediationItem {
        criterion_id: action.criterion_id.clone(),
        title: action.title.clone(),
        pillar: action.pillar,
        level: action.level,
        disposition,
        description,
        file_ops: if disposition == Disposition::AutoScaffold {
            file_ops
        } else {
            Vec::new()
        },
        manual_steps: steps,
    }
}

/// Build a plan for up to `max_items` failing criteria of the blocking
/// level, ranked like the scorecard's action items. File existence comes
/// from the scorecard's evaluation.
pub fn build_plan(card: &Scorecard, config: &RepoConfig, max_items: usize) -> RemediationPlan {
    RemediationPlan {
        repo_name: card.repo_name.clone(),
        level_achieved: card.progression.level_achieved,
        blocking_level: card.progression.blocking_level,
        target_level: card.progression.next_level_target,
        items: card
            .remediation_queue
            .iter()
            .take(max_items)
            .map(|a| plan_item(a, card, config))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorecard::evaluate_with;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn app(path: &str, kind: AppKind) -> Application {
        Application {
            path: path.to_string(),
            kind,
            name: path.to_string(),
            description: String::new(),
        }
    }

    fn plan_for(temp: &TempDir, config: &RepoConfig) -> RemediationPlan {
        let card = evaluate_with(temp.path(), config).unwrap();
        build_plan(&card, config, 20)
    }

    #[test]
    fn test_default_owner() {
        let mut config = RepoConfig::default();
        assert_eq!(default_owner(&config), PLACEHOLDER_OWNER);
        config.default_codeowner = Some("@platform-team".to_string());
        assert_eq!(default_owner(&config), "platform-team");
        config.default_codeowner = Some("  ".to_string());
        assert_eq!(default_owner(&config), PLACEHOLDER_OWNER);
    }

    #[test]
    fn test_dependabot_per_ecosystem() {
        let apps = vec![
            app("apps/web", AppKind::Node),
            app("apps/api", AppKind::Python),
            app("apps/web", AppKind::Node),
            app("tools", AppKind::Unknown),
        ];
        let yaml = dependabot_yaml(&apps).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let updates = doc["updates"].as_sequence().unwrap();
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0]["package-ecosystem"].as_str(), Some("github-actions"));
        assert_eq!(updates[1]["directory"].as_str(), Some("/apps/web"));
        assert_eq!(updates[2]["package-ecosystem"].as_str(), Some("pip"));
        assert_eq!(updates[2]["schedule"]["interval"].as_str(), Some("weekly"));
    }

    #[test]
    fn test_empty_repo_plan_splits_items() {
        let temp = TempDir::new().unwrap();
        let plan = plan_for(&temp, &RepoConfig::default());
        assert_eq!(plan.blocking_level, Some(1));
        assert!(plan.items.iter().all(|i| i.level == 1));

        let readme = plan
            .items
            .iter()
            .find(|i| i.criterion_id == "readme")
            .unwrap();
        assert_eq!(readme.disposition, Disposition::AutoScaffold);
        assert_eq!(readme.file_ops.len(), 1);
        assert_eq!(readme.file_ops[0].path, "README.md");
        assert!(!readme.file_ops[0].already_exists);

        assert!(plan.manual_count() + plan.auto_scaffold_count() == plan.items.len());
        assert!(plan
            .items
            .iter()
            .filter(|i| i.disposition == Disposition::Manual)
            .all(|i| i.file_ops.is_empty() && !i.manual_steps.is_empty()));
    }

    #[test]
    fn test_plan_never_writes() {
        let temp = TempDir::new().unwrap();
        let plan = plan_for(&temp, &RepoConfig::default());
        assert!(plan.pending_files().count() > 0);
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_existing_file_becomes_manual() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "*.log\n").unwrap();
        let plan = plan_for(&temp, &RepoConfig::default());
        let item = plan
            .items
            .iter()
            .find(|i| i.criterion_id == "gitignore")
            .unwrap();
        assert_eq!(item.disposition, Disposition::Manual);
        assert!(item.manual_steps[0].contains(".gitignore"));
    }

    #[test]
    fn test_max_items_caps_plan() {
        let temp = TempDir::new().unwrap();
        let config = RepoConfig::default();
        let card = evaluate_with(temp.path(), &config).unwrap();
        let plan = build_plan(&card, &config, 2);
        assert_eq!(plan.items.len(), 2);
    }

    #[test]
    fn test_plan_agrees_with_scorecard_disposition() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "*.log\n").unwrap();
        let config = RepoConfig::default();
        let card = evaluate_with(temp.path(), &config).unwrap();
        let plan = build_plan(&card, &config, 20);

        let action = card
            .remediation_queue
            .iter()
            .find(|a| a.criterion_id == "gitignore")
            .unwrap();
        assert_eq!(action.disposition, Disposition::Manual);
        for item in &plan.items {
            let queued = card
                .remediation_queue
                .iter()
                .find(|a| a.criterion_id == item.criterion_id)
                .unwrap();
            assert_eq!(item.disposition, queued.disposition, "{}", item.criterion_id);
        }
    }

    #[test]
    fn test_every_scaffold_criterion_has_guidance() {
        let catalog = crate::catalog::Catalog::builtin().unwrap();
        for c in catalog.criteria().iter().filter(|c| !c.scaffold.is_empty()) {
            assert!(guidance(c.id).is_some(), "{}", c.id);
        }
    }
}
