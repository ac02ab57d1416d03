//! Core types for evaluation results.

use serde::{Deserialize, Serialize};

use crate::catalog::Pillar;

/// Outcome of a single status check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
    Skipped,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pass => write!(f, "pass"),
            Status::Fail => write!(f, "fail"),
            Status::Skipped => write!(f, "skipped"),
        }
    }
}

/// Why a verdict was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipKind {
    /// The signal lives outside the working tree (host settings, VCS history).
    NonLocalSignal,
    /// The criterion does not apply to this scope.
    NotApplicable,
}

impl std::fmt::Display for SkipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipKind::NonLocalSignal => write!(f, "non_local_signal"),
            SkipKind::NotApplicable => write!(f, "not_applicable"),
        }
    }
}

/// What a criterion check returns. A skip always carries its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass { reason: String, evidence: Vec<String> },
    Fail { reason: String, evidence: Vec<String> },
    Skipped { kind: SkipKind, reason: String },
}

impl Outcome {
    pub fn pass(reason: impl Into<String>, evidence: Vec<String>) -> Self {
        Outcome::Pass {
            reason: reason.into(),
            evidence,
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Outcome::Fail {
            reason: reason.into(),
            evidence: Vec::new(),
        }
    }

    pub fn non_local(reason: impl Into<String>) -> Self {
        Outcome::Skipped {
            kind: SkipKind::NonLocalSignal,
            reason: reason.into(),
        }
    }

    pub fn not_applicable(reason: impl Into<String>) -> Self {
        Outcome::Skipped {
            kind: SkipKind::NotApplicable,
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Outcome::Pass { .. } => Status::Pass,
            Outcome::Fail { .. } => Status::Fail,
            Outcome::Skipped { .. } => Status::Skipped,
        }
    }
}

/// The scope a verdict was evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum VerdictScope {
    Repo,
    App(String),
}

impl VerdictScope {
    pub fn label(&self) -> &str {
        match self {
            VerdictScope::Repo => "repo",
            VerdictScope::App(path) => path,
        }
    }

    pub fn is_repo(&self) -> bool {
        matches!(self, VerdictScope::Repo)
    }
}

impl std::fmt::Display for VerdictScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of evaluating one criterion against one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub criterion_id: String,
    pub pillar: Pillar,
    pub level: u8,
    pub scope: VerdictScope,
    pub status: Status,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<SkipKind>,
}

impl Verdict {
    pub fn from_outcome(
        criterion_id: &str,
        pillar: Pillar,
        level: u8,
        scope: VerdictScope,
        outcome: Outcome,
    ) -> Self {
        let status = outcome.status();
        let (reason, evidence, skip_reason) = match outcome {
            Outcome::Pass { reason, evidence } | Outcome::Fail { reason, evidence } => {
                (reason, evidence, None)
            }
            Outcome::Skipped { kind, reason } => (reason, Vec::new(), Some(kind)),
        };
        Self {
            criterion_id: criterion_id.to_string(),
            pillar,
            level,
            scope,
            status,
            reason,
            evidence,
            skip_reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_carries_reason() {
        let v = Verdict::from_outcome(
            "branch_protection",
            Pillar::SecurityGovernance,
            3,
            VerdictScope::Repo,
            Outcome::non_local("needs host settings"),
        );
        assert_eq!(v.status, Status::Skipped);
        assert_eq!(v.skip_reason, Some(SkipKind::NonLocalSignal));
        assert_eq!(v.reason, "needs host settings");
    }

    #[test]
    fn test_scope_serialization() {
        let repo = serde_json::to_value(VerdictScope::Repo).unwrap();
        assert_eq!(repo, serde_json::json!({"kind": "repo"}));
        let app = serde_json::to_value(VerdictScope::App("apps/web".into())).unwrap();
        assert_eq!(app, serde_json::json!({"kind": "app", "path": "apps/web"}));
    }

    #[test]
    fn test_pass_verdict_has_no_skip_reason() {
        let v = Verdict::from_outcome(
            "readme",
            Pillar::Documentation,
            1,
            VerdictScope::Repo,
            Outcome::pass("found", vec!["README.md".into()]),
        );
        let json = serde_json::to_value(&v).unwrap();
        assert!(json.get("skip_reason").is_none());
        assert_eq!(json["status"], "pass");
        assert_eq!(json["evidence"][0], "README.md");
    }
}
