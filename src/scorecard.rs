//! Pipeline entry point and the serializable scorecard.
//!
//! ```text
//! root ──► RepoConfig ──► ExcludeSet ──► Evidence ──► discover_apps
//!                                            │
//!                         Catalog ──► Evaluator::run ──► [Verdict]
//!                                                          │
//!                      rollup / aggregate / select_action_items / highlights
//!                                                          │
//!                                                       Scorecard
//! ```
//!
//! The scorecard carries no timestamps and no absolute paths, so two runs
//! over an unchanged tree serialize to identical bytes.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::aggregate::{
    aggregate, LevelScore, PassRate, PillarScore, Progression, Tally, UNLOCK_THRESHOLD_PERCENT,
};
use crate::catalog::checks::docs::README_FILES;
use crate::catalog::{Catalog, LevelInfo, Pillar, LEVELS};
use crate::config::{self, RepoConfig, RepoKind};
use crate::error::{EvalError, Result};
use crate::evaluate::{rollup, CriterionResult, Evaluator, Verdict};
use crate::evidence::{detect_languages, discover_apps, Application, Evidence, ExcludeSet};
use crate::recommend::{
    highlights, select_action_items, ActionItem, Highlights, MAX_ACTION_ITEMS,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarInfo {
    pub id: Pillar,
    pub name: &'static str,
    pub why: &'static str,
    pub what_it_catches: &'static str,
}

/// Pillar and level descriptions embedded in every scorecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Framework {
    pub unlock_threshold_percent: usize,
    pub pillars: Vec<PillarInfo>,
    pub levels: Vec<LevelInfo>,
}

impl Framework {
    pub fn builtin() -> Self {
        Self {
            unlock_threshold_percent: UNLOCK_THRESHOLD_PERCENT,
            pillars: Pillar::ALL
                .iter()
                .map(|&p| PillarInfo {
                    id: p,
                    name: p.name(),
                    why: p.why(),
                    what_it_catches: p.what_it_catches(),
                })
                .collect(),
            levels: LEVELS.to_vec(),
        }
    }
}

/// Complete result of evaluating one repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub tool_version: &'static str,
    pub repo_name: String,
    /// First prose line of the root README.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub repo_description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub org_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_kind: Option<RepoKind>,
    pub apps: Vec<Application>,
    pub languages: Vec<String>,
    #[serde(flatten)]
    pub progression: Progression,
    pub overall: Tally,
    pub overall_rate: PassRate,
    pub pillars: Vec<PillarScore>,
    pub levels: Vec<LevelScore>,
    pub action_items: Vec<ActionItem>,
    /// Every failing criterion of the blocking level, ranked. `action_items`
    /// is its head; remediation plans draw deeper from it.
    #[serde(skip)]
    pub remediation_queue: Vec<ActionItem>,
    pub highlights: Highlights,
    pub criteria: Vec<CriterionResult>,
    pub verdicts: Vec<Verdict>,
    pub framework: Framework,
}

impl Scorecard {
    /// Whether `level` has been reached.
    pub fn reaches(&self, level: u8) -> bool {
        self.progression.level_achieved >= level
    }
}

/// Evaluate `root` with the `.readycheck.json` found there, if any.
pub fn evaluate_repository<P: AsRef<Path>>(root: P) -> Result<Scorecard> {
    let root = root.as_ref();
    check_root(root)?;
    let config = RepoConfig::load(root)?;
    evaluate_with(root, &config)
}

/// Evaluate `root` with an explicit configuration.
pub fn evaluate_with<P: AsRef<Path>>(root: P, config: &RepoConfig) -> Result<Scorecard> {
    let catalog = Catalog::builtin()?;
    evaluate_catalog(root.as_ref(), config, &catalog)
}

/// Evaluate `root` against an arbitrary catalog.
pub fn evaluate_catalog(root: &Path, config: &RepoConfig, catalog: &Catalog) -> Result<Scorecard> {
    check_root(root)?;
    config::validate(config)?;

    let excludes = ExcludeSet::from_config(config)?;
    let evidence = Evidence::new(root, excludes);
    let apps = discover_apps(&evidence, config);

    let verdicts = Evaluator::new(catalog).run(&evidence, config, &apps);
    let criteria = rollup(catalog, &verdicts);
    let agg = aggregate(&verdicts, config.next_level_policy());

    let remediation_queue = match agg.progression.blocking_level {
        Some(level) => select_action_items(
            catalog,
            &evidence,
            &criteria,
            &verdicts,
            &agg.pillars,
            level,
            usize::MAX,
        ),
        None => Vec::new(),
    };
    let action_items = remediation_queue
        .iter()
        .take(MAX_ACTION_ITEMS)
        .cloned()
        .collect();
    let highlights = highlights(&agg.pillars, &criteria);

    Ok(Scorecard {
        tool_version: env!("CARGO_PKG_VERSION"),
        repo_name: repo_name(root),
        repo_description: repo_description(&evidence),
        org_name: config.org_name().to_string(),
        repo_kind: config.repo_kind,
        languages: detect_languages(&apps),
        apps,
        progression: agg.progression,
        overall: agg.overall,
        overall_rate: agg.overall_rate,
        pillars: agg.pillars,
        levels: agg.levels,
        action_items,
        remediation_queue,
        highlights,
        criteria,
        verdicts,
        framework: Framework::builtin(),
    })
}

fn check_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|_| EvalError::RootNotFound(root.to_path_buf()))?;
    if !metadata.is_dir() {
        return Err(EvalError::RootNotDirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Final component of the resolved root, e.g. `"billing"`.
fn repo_name(root: &Path) -> String {
    fs::canonicalize(root)
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "repository".to_string())
}

/// First non-empty, non-heading line of the root README, capped at 200 chars.
fn repo_description(evidence: &Evidence) -> String {
    README_FILES
        .iter()
        .find_map(|name| {
            let fact = evidence.text(name);
            let text = fact.text()?;
            text.raw
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty() && !line.starts_with('#'))
                .map(|line| line.chars().take(200).collect())
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::Status;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(matches!(
            evaluate_repository(&missing),
            Err(EvalError::RootNotFound(_))
        ));
    }

    #[test]
    fn test_root_is_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("README.md");
        fs::write(&file, "# hi").unwrap();
        assert!(matches!(
            evaluate_repository(&file),
            Err(EvalError::RootNotDirectory(_))
        ));
    }

    #[test]
    fn test_invalid_glob_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config = RepoConfig {
            exclude_globs: vec!["a/[".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            evaluate_with(temp.path(), &config),
            Err(EvalError::InvalidGlob { .. })
        ));
    }

    #[test]
    fn test_empty_repo_scorecard() {
        let temp = TempDir::new().unwrap();
        let card = evaluate_repository(temp.path()).unwrap();
        assert_eq!(card.progression.level_achieved, 0);
        assert_eq!(card.progression.blocking_level, Some(1));
        assert_eq!(card.criteria.len(), 53);
        assert_eq!(card.framework.levels.len(), 5);
        assert!(!card.action_items.is_empty());
        assert!(card.action_items.len() <= MAX_ACTION_ITEMS);
        assert!(card.action_items.iter().all(|a| a.level == 1));
        assert!(!card.reaches(1));
    }

    #[test]
    fn test_repo_description_from_readme() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("README.md"),
            "# Billing\n\n## Overview\n  Invoices and payment runs.  \nMore text.\n",
        )
        .unwrap();
        let card = evaluate_repository(temp.path()).unwrap();
        assert_eq!(card.repo_description, "Invoices and payment runs.");
    }

    #[test]
    fn test_action_items_head_remediation_queue() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "*.log\n").unwrap();
        let card = evaluate_repository(temp.path()).unwrap();
        let head = card.remediation_queue.len().min(MAX_ACTION_ITEMS);
        assert_eq!(card.action_items.as_slice(), &card.remediation_queue[..head]);
        let gitignore = card
            .remediation_queue
            .iter()
            .find(|a| a.criterion_id == "gitignore")
            .unwrap();
        assert_eq!(gitignore.disposition, crate::recommend::Disposition::Manual);
    }

    #[test]
    fn test_skipped_verdicts_counted_separately() {
        let temp = TempDir::new().unwrap();
        let card = evaluate_repository(temp.path()).unwrap();
        for pillar in &card.pillars {
            let t = pillar.tally;
            let total = card.verdicts.iter().filter(|v| v.pillar == pillar.pillar).count();
            assert_eq!(t.passed + t.failed + t.skipped, total);
        }
        let skipped = card
            .verdicts
            .iter()
            .filter(|v| v.status == Status::Skipped)
            .count();
        assert_eq!(card.overall.skipped, skipped);
    }
}
