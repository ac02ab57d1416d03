//! Action-item selection and scorecard highlights.

use std::cmp::Reverse;

use serde::Serialize;

use crate::aggregate::{PillarScore, UNLOCK_THRESHOLD_PERCENT};
use crate::catalog::{Catalog, CriterionScope, Pillar};
use crate::evaluate::{CriterionResult, Status, Verdict};
use crate::evidence::Evidence;

/// Maximum number of action items in a scorecard.
pub const MAX_ACTION_ITEMS: usize = 5;

/// Number of strengths and opportunities reported as highlights.
pub const HIGHLIGHT_COUNT: usize = 3;

/// How an action item can be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Missing hygiene files that can be created from templates.
    AutoScaffold,
    Manual,
}

/// A hygiene file that would satisfy a criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldFile {
    pub path: String,
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionItem {
    pub rank: usize,
    pub criterion_id: String,
    pub title: String,
    pub pillar: Pillar,
    pub level: u8,
    pub scope: CriterionScope,
    /// One-line description of what is wrong.
    pub problem: String,
    pub remediation: String,
    pub why: String,
    /// Scopes whose verdict failed, e.g. `["repo"]` or `["apps/web"]`.
    pub failing_scopes: Vec<String>,
    pub unmet_prerequisites: Vec<String>,
    pub disposition: Disposition,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scaffold_files: Vec<ScaffoldFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Strength {
    pub pillar: Pillar,
    pub name: &'static str,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opportunity {
    pub criterion_id: String,
    pub title: String,
    pub pillar: Pillar,
    pub level: u8,
    pub weight: u32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlights {
    pub strengths: Vec<Strength>,
    pub opportunities: Vec<Opportunity>,
}

/// Prerequisites of `id` whose roll-up failed.
fn unmet_prerequisites(catalog: &Catalog, results: &[CriterionResult], id: &str) -> Vec<String> {
    let Some(criterion) = catalog.get(id) else {
        return Vec::new();
    };
    criterion
        .requires
        .iter()
        .filter(|req| {
            results
                .iter()
                .any(|r| r.id == **req && r.status == Status::Fail)
        })
        .map(|req| req.to_string())
        .collect()
}

/// How far a pillar sits below the unlock line, in basis points.
fn pillar_deficit(pillars: &[PillarScore], pillar: Pillar) -> usize {
    let line = UNLOCK_THRESHOLD_PERCENT * 100;
    pillars
        .iter()
        .find(|p| p.pillar == pillar)
        .and_then(|p| p.tally.basis_points())
        .map(|bp| line.saturating_sub(bp))
        .unwrap_or(0)
}

/// Scaffold files of `id`, checked against the indexed tree.
fn scaffold_files(catalog: &Catalog, evidence: &Evidence, id: &str) -> Vec<ScaffoldFile> {
    catalog
        .get(id)
        .map(|c| c.scaffold)
        .unwrap_or(&[])
        .iter()
        .map(|path| ScaffoldFile {
            path: path.to_string(),
            exists: evidence.exists(path),
        })
        .collect()
}

/// Auto-scaffold applies only while some scaffold file is still missing.
fn disposition(files: &[ScaffoldFile]) -> Disposition {
    if files.iter().any(|f| !f.exists) {
        Disposition::AutoScaffold
    } else {
        Disposition::Manual
    }
}

/// Pick up to `limit` failing criteria of `level`, ranked to unlock it
/// fastest: repo-wide criteria first, then those with the fewest unmet
/// prerequisites, then those in the pillar furthest below the threshold.
/// Remaining ties go to the lexically smaller id.
pub fn select_action_items(
    catalog: &Catalog,
    evidence: &Evidence,
    results: &[CriterionResult],
    verdicts: &[Verdict],
    pillars: &[PillarScore],
    level: u8,
    limit: usize,
) -> Vec<ActionItem> {
    let mut candidates: Vec<(&CriterionResult, Vec<String>)> = results
        .iter()
        .filter(|r| r.level == level && r.status == Status::Fail)
        .map(|r| (r, unmet_prerequisites(catalog, results, &r.id)))
        .collect();

    candidates.sort_by_key(|(r, unmet)| {
        (
            r.scope != CriterionScope::Repo,
            unmet.len(),
            Reverse(pillar_deficit(pillars, r.pillar)),
            r.id.clone(),
        )
    });

    candidates
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, (r, unmet))| {
            let failing_scopes = verdicts
                .iter()
                .filter(|v| v.criterion_id == r.id && v.status == Status::Fail)
                .map(|v| v.scope.label().to_string())
                .collect();
            let scaffold_files = scaffold_files(catalog, evidence, &r.id);
            ActionItem {
                rank: idx + 1,
                criterion_id: r.id.clone(),
                title: r.title.clone(),
                pillar: r.pillar,
                level: r.level,
                scope: r.scope,
                problem: r.reason.clone(),
                remediation: r.remediation.clone(),
                why: r.why.clone(),
                failing_scopes,
                unmet_prerequisites: unmet,
                disposition: disposition(&scaffold_files),
                scaffold_files,
            }
        })
        .collect()
}

/// Strongest pillars by pass rate and the heaviest failing criteria.
pub fn highlights(pillars: &[PillarScore], results: &[CriterionResult]) -> Highlights {
    let mut ranked: Vec<(&PillarScore, usize)> = pillars
        .iter()
        .filter_map(|p| p.tally.basis_points().map(|bp| (p, bp)))
        .collect();
    ranked.sort_by_key(|(p, bp)| (Reverse(*bp), p.pillar));
    let strengths = ranked
        .into_iter()
        .take(HIGHLIGHT_COUNT)
        .map(|(p, _)| Strength {
            pillar: p.pillar,
            name: p.name,
            percent: p.rate.percent().unwrap_or(0),
        })
        .collect();

    let mut failing: Vec<&CriterionResult> =
        results.iter().filter(|r| r.status == Status::Fail).collect();
    failing.sort_by_key(|r| (Reverse(r.weight), r.level, r.pillar, r.id.clone()));
    let opportunities = failing
        .into_iter()
        .take(HIGHLIGHT_COUNT)
        .map(|r| Opportunity {
            criterion_id: r.id.clone(),
            title: r.title.clone(),
            pillar: r.pillar,
            level: r.level,
            weight: r.weight,
            reason: r.reason.clone(),
        })
        .collect();

    Highlights {
        strengths,
        opportunities,
    }
}
