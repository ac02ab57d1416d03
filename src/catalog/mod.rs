//! The criterion catalog: pillars, levels, and the criteria themselves.
//!
//! Criteria are plain records holding a check function pointer. The
//! built-in table lives in [`criteria`]; the checks live in one module per
//! pillar under [`checks`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};
use crate::evaluate::Outcome;
use crate::evidence::Probe;

pub mod checks;
mod criteria;
mod signals;

pub use criteria::BUILTIN;
pub use signals::Signals;

/// Highest maturity level.
pub const MAX_LEVEL: u8 = 5;

/// The eight readiness pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    StyleValidation,
    BuildSystem,
    Testing,
    Documentation,
    DevEnvironment,
    CodeQuality,
    Observability,
    SecurityGovernance,
}

impl Pillar {
    pub const ALL: [Pillar; 8] = [
        Pillar::StyleValidation,
        Pillar::BuildSystem,
        Pillar::Testing,
        Pillar::Documentation,
        Pillar::DevEnvironment,
        Pillar::CodeQuality,
        Pillar::Observability,
        Pillar::SecurityGovernance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::StyleValidation => "style_validation",
            Pillar::BuildSystem => "build_system",
            Pillar::Testing => "testing",
            Pillar::Documentation => "documentation",
            Pillar::DevEnvironment => "dev_environment",
            Pillar::CodeQuality => "code_quality",
            Pillar::Observability => "observability",
            Pillar::SecurityGovernance => "security_governance",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pillar::StyleValidation => "Style & Validation",
            Pillar::BuildSystem => "Build System",
            Pillar::Testing => "Testing",
            Pillar::Documentation => "Documentation",
            Pillar::DevEnvironment => "Dev Environment",
            Pillar::CodeQuality => "Code Quality",
            Pillar::Observability => "Observability",
            Pillar::SecurityGovernance => "Security & Governance",
        }
    }

    pub fn why(&self) -> &'static str {
        match self {
            Pillar::StyleValidation => "Fast, local feedback (lint/format/typecheck) prevents agents from iterating blindly on avoidable errors.",
            Pillar::BuildSystem => "Deterministic build and release paths let agents verify changes end-to-end without tribal knowledge.",
            Pillar::Testing => "Tests are the safety net that lets agents move fast without breaking behavior.",
            Pillar::Documentation => "Written instructions replace oral tradition. Agents need explicit setup/run/deploy/debug guidance.",
            Pillar::DevEnvironment => "Reproducible environments eliminate 'works on my machine' and make agent verification reliable.",
            Pillar::CodeQuality => "Agents scale better in modular, low-complexity codebases with explicit architectural boundaries.",
            Pillar::Observability => "Logs/metrics/traces turn failures into explanations. Agents need runtime visibility to debug effectively.",
            Pillar::SecurityGovernance => "Acceleration without guardrails increases risk. Ownership and automated scanning keep velocity safe.",
        }
    }

    pub fn what_it_catches(&self) -> &'static str {
        match self {
            Pillar::StyleValidation => "Syntax/style drift, type errors, low-signal CI failures.",
            Pillar::BuildSystem => "Unclear build commands, unpinned deps, missing CI/release automation.",
            Pillar::Testing => "Lack of unit/integration tests, brittle or slow test loops.",
            Pillar::Documentation => "Missing setup steps, undocumented env vars, unclear operational procedures.",
            Pillar::DevEnvironment => "Inconsistent local setup, missing env templates, undocumented local services.",
            Pillar::CodeQuality => "High complexity, dead/duplicate code, weak module boundaries, unmanaged tech debt.",
            Pillar::Observability => "Opaque runtime errors, lack of runbooks, missing telemetry and alert signals.",
            Pillar::SecurityGovernance => "Missing ownership, weak review boundaries, absent scanning and dependency hygiene.",
        }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Description of one maturity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub agent_capability: &'static str,
}

pub const LEVELS: [LevelInfo; 5] = [
    LevelInfo {
        level: 1,
        name: "Functional",
        description: "Baseline tooling exists; code can run/build/test with manual effort.",
        agent_capability: "Small, supervised changes; limited self-validation.",
    },
    LevelInfo {
        level: 2,
        name: "Documented",
        description: "Setup and workflows are written down; basic automation exists.",
        agent_capability: "Reliable onboarding; agents can follow documented commands.",
    },
    LevelInfo {
        level: 3,
        name: "Standardized",
        description: "Processes are defined and enforced through automation (practical production target).",
        agent_capability: "Routine maintenance (bug fixes, tests, docs, dependency upgrades) with tight feedback loops.",
    },
    LevelInfo {
        level: 4,
        name: "Optimized",
        description: "Fast feedback and continuous measurement; systems tuned for productivity.",
        agent_capability: "Larger refactors and feature work with strong verification and faster iteration.",
    },
    LevelInfo {
        level: 5,
        name: "Autonomous",
        description: "Self-improving systems and orchestrated maintenance; minimal human intervention.",
        agent_capability: "Proactive improvement and parallelized work decomposition (rare; incremental).",
    },
];

/// Name of a level, e.g. `"Documented"` for 2.
pub fn level_name(level: u8) -> &'static str {
    LEVELS
        .iter()
        .find(|l| l.level == level)
        .map(|l| l.name)
        .unwrap_or("Unknown")
}

/// Whether a criterion is evaluated once, or once per application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionScope {
    Repo,
    App,
}

/// Predicate evaluated against a probe.
pub type CheckFn = fn(&Probe<'_>) -> Outcome;

/// Immutable definition of a criterion.
#[derive(Clone, Copy)]
pub struct Criterion {
    pub id: &'static str,
    pub title: &'static str,
    pub pillar: Pillar,
    pub level: u8,
    pub scope: CriterionScope,
    /// Relative importance, used to rank opportunities.
    pub weight: u32,
    pub why: &'static str,
    pub remediation: &'static str,
    /// Criteria that should pass before this one is meaningful.
    pub requires: &'static [&'static str],
    /// Hygiene files that can be created to satisfy this criterion.
    pub scaffold: &'static [&'static str],
    pub check: CheckFn,
}

impl std::fmt::Debug for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Criterion")
            .field("id", &self.id)
            .field("pillar", &self.pillar)
            .field("level", &self.level)
            .field("scope", &self.scope)
            .finish()
    }
}

/// A validated set of criteria.
#[derive(Debug, Clone)]
pub struct Catalog {
    criteria: Vec<Criterion>,
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_criteria(BUILTIN.to_vec())
    }

    /// Build a catalog from arbitrary criteria, validating ids, levels and
    /// prerequisite references.
    pub fn from_criteria(criteria: Vec<Criterion>) -> Result<Self> {
        let mut seen = HashSet::new();
        for c in &criteria {
            if !seen.insert(c.id) {
                return Err(EvalError::Catalog(format!("duplicate criterion id {:?}", c.id)));
            }
            if c.level == 0 || c.level > MAX_LEVEL {
                return Err(EvalError::Catalog(format!(
                    "criterion {:?} has level {} outside 1..={}",
                    c.id, c.level, MAX_LEVEL
                )));
            }
        }
        for c in &criteria {
            for req in c.requires {
                let Some(dep) = criteria.iter().find(|d| d.id == *req) else {
                    return Err(EvalError::Catalog(format!(
                        "criterion {:?} requires unknown criterion {:?}",
                        c.id, req
                    )));
                };
                if dep.id == c.id || dep.level > c.level {
                    return Err(EvalError::Catalog(format!(
                        "criterion {:?} cannot require {:?}",
                        c.id, req
                    )));
                }
            }
        }
        Ok(Self { criteria })
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn get(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}
