//! Per-criterion roll-up of verdicts across scopes.

use serde::Serialize;

use super::{Status, Verdict};
use crate::catalog::{Catalog, CriterionScope, Pillar};

/// A criterion together with the combined status of all its verdicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionResult {
    pub id: String,
    pub title: String,
    pub pillar: Pillar,
    pub level: u8,
    pub scope: CriterionScope,
    pub weight: u32,
    /// Passing scopes.
    pub numerator: usize,
    /// Passing plus failing scopes; skipped scopes are not counted.
    pub denominator: usize,
    pub status: Status,
    pub reason: String,
    pub why: String,
    pub remediation: String,
}

/// Roll verdicts up to one result per catalog criterion, in catalog order.
///
/// A criterion passes when every non-skipped scope passes, is skipped when
/// every scope skipped, and fails otherwise. The reason is taken from the
/// first verdict with the rolled-up status.
pub fn rollup(catalog: &Catalog, verdicts: &[Verdict]) -> Vec<CriterionResult> {
    catalog
        .criteria()
        .iter()
        .map(|c| {
            let units: Vec<&Verdict> = verdicts.iter().filter(|v| v.criterion_id == c.id).collect();
            let numerator = units.iter().filter(|v| v.status == Status::Pass).count();
            let denominator = units.iter().filter(|v| v.status != Status::Skipped).count();
            let status = if denominator == 0 {
                Status::Skipped
            } else if numerator == denominator {
                Status::Pass
            } else {
                Status::Fail
            };
            let reason = units
                .iter()
                .find(|v| v.status == status)
                .map(|v| v.reason.clone())
                .unwrap_or_default();
            CriterionResult {
                id: c.id.to_string(),
                title: c.title.to_string(),
                pillar: c.pillar,
                level: c.level,
                scope: c.scope,
                weight: c.weight,
                numerator,
                denominator,
                status,
                reason,
                why: c.why.to_string(),
                remediation: c.remediation.to_string(),
            }
        })
        .collect()
}
