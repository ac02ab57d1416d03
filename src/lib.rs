//! Readycheck - repository maturity evaluator.
//!
//! Readycheck inspects what is on disk in a repository (manifests, CI
//! definitions, tool configs, docs) and scores it against a catalog of
//! binary criteria grouped into eight pillars. Criteria are assigned to one
//! of five levels, and levels unlock in order: a level counts as achieved
//! only when it and every level below it pass at least 80% of their
//! applicable criteria.
//!
//! # Architecture
//!
//! - `config`: `.readycheck.json` schema, defaults and validation
//! - `evidence`: one walk of the tree, memoized file facts, app discovery
//! - `catalog`: pillars, levels, criterion records and their checks
//! - `evaluate`: verdicts per criterion and scope, and their roll-up
//! - `aggregate`: pillar and level rates, gated progression
//! - `recommend`: action items and highlights
//! - `remediation`: auto-scaffold vs manual remediation plans
//! - `scorecard`: the pipeline entry point
//! - `report`: output formatting (pretty, JSON)
//!
//! # Adding a Criterion
//!
//! Write a check in the matching `catalog/checks/` module and add a record
//! to `catalog/criteria.rs`. `Catalog::from_criteria` rejects duplicate ids
//! and prerequisites that point at unknown or higher-level criteria.

pub mod aggregate;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod evidence;
pub mod recommend;
pub mod remediation;
pub mod report;
pub mod scorecard;

pub use aggregate::{Aggregate, LevelScore, PassRate, PillarScore, Progression, Tally};
pub use catalog::{Catalog, Criterion, CriterionScope, Pillar};
pub use config::{NextLevelPolicy, RepoConfig, RepoKind};
pub use error::{EvalError, Result};
pub use evaluate::{CriterionResult, Evaluator, Outcome, SkipKind, Status, Verdict, VerdictScope};
pub use evidence::{AppKind, Application, Evidence, ExcludeSet};
pub use recommend::{ActionItem, Disposition, Highlights, ScaffoldFile};
pub use remediation::{build_plan, RemediationPlan};
pub use scorecard::{evaluate_repository, evaluate_with, Scorecard};
