//! Security and governance checks.

use crate::catalog::Signals;
use crate::evaluate::Outcome;
use crate::evidence::Probe;

/// Entries a reasonable `.gitignore` usually covers.
const GITIGNORE_ENTRIES: &[&str] = &[
    "node_modules",
    ".env",
    ".ds_store",
    ".idea",
    ".vscode",
    "__pycache__",
    "dist",
    "build",
    "target",
];

/// How many of [`GITIGNORE_ENTRIES`] must appear.
const GITIGNORE_MIN_ENTRIES: usize = 3;

pub const CODEOWNERS_FILES: &[&str] = &["CODEOWNERS", ".github/CODEOWNERS", "docs/CODEOWNERS"];

const SCRUB_DOC_NEEDLES: &[&str] = &["redact", "scrub", "pii", "mask", "secrets redaction"];

const SCRUB_SOURCE_DIRS: &[&str] = &["src", "app", "pkg", "internal"];

/// Sources scanned per directory when looking for redaction helpers.
const MAX_SCRUB_SCAN: usize = 50;

const SOURCE_EXTENSIONS: &[&str] = &[".py", ".ts", ".js", ".go", ".rs", ".java"];

pub fn gitignore(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    let Some(text) = s.text(p.evidence, ".gitignore") else {
        return s.finish("", "No .gitignore found.");
    };
    let covered = GITIGNORE_ENTRIES
        .iter()
        .filter(|entry| text.lower.contains(*entry))
        .count();
    if covered >= GITIGNORE_MIN_ENTRIES {
        s.hit(".gitignore");
        return s.finish(".gitignore exists and contains common exclusions.", "");
    }
    Outcome::Fail {
        reason: format!(
            ".gitignore exists but covers only {} of the common exclusions (need {}).",
            covered, GITIGNORE_MIN_ENTRIES
        ),
        evidence: vec![".gitignore".to_string()],
    }
}

pub fn codeowners(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, CODEOWNERS_FILES);
    s.finish("CODEOWNERS file found.", "No CODEOWNERS file found.")
}

pub fn pr_template(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(
        p.evidence,
        &[
            ".github/pull_request_template.md",
            ".github/PULL_REQUEST_TEMPLATE.md",
            ".github/PULL_REQUEST_TEMPLATE",
            "PULL_REQUEST_TEMPLATE.md",
            "docs/pull_request_template.md",
        ],
    );
    s.finish("PR template found.", "No PR template found.")
}

pub fn issue_templates(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, &[".github/ISSUE_TEMPLATE", ".github/ISSUE_TEMPLATE.md"]);
    s.finish("Issue templates found.", "No issue templates found.")
}

pub fn dependabot(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(
        p.evidence,
        &[
            ".github/dependabot.yml",
            ".github/dependabot.yaml",
            "renovate.json",
            "renovate.json5",
            ".github/renovate.json",
            ".renovaterc",
            ".renovaterc.json",
        ],
    );
    s.finish(
        "Automated dependency update config found.",
        "No Dependabot/Renovate configuration found.",
    )
}

pub fn sast_scanning(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(
        p.evidence,
        &[
            ".github/workflows/codeql.yml",
            ".github/workflows/codeql.yaml",
            ".github/workflows/codeql-analysis.yml",
            ".semgrep.yml",
            ".semgrep.yaml",
        ],
    );
    s.ci_any(p.evidence, &["semgrep", "codeql", "snyk code", "gosec", "bandit"]);
    let fail = if p.evidence.has_ci() {
        "No static security scanning found in CI or config."
    } else {
        "No CI configuration detected and no static scanning config found."
    };
    s.finish("Static scanning configuration detected.", fail)
}

pub fn secret_scanning_tooling(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(
        p.evidence,
        &[
            ".gitleaks.toml",
            ".gitleaks.yml",
            ".gitleaks.yaml",
            "gitleaks.toml",
            ".secrets.baseline",
            ".trufflehog.yml",
        ],
    );
    s.ci_any(p.evidence, &["gitleaks", "trufflehog", "detect-secrets"]);
    s.text_any(p.evidence, &[".pre-commit-config.yaml"], &["gitleaks", "detect-secrets"]);
    s.finish(
        "Secret scanning tooling/config detected.",
        "No repo-local secret scanning tooling found.",
    )
}

pub fn security_policy(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, &["SECURITY.md", ".github/SECURITY.md", "docs/SECURITY.md"]);
    s.finish("Security policy found.", "No SECURITY.md found.")
}

pub fn log_scrubbing(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.text_any(
        p.evidence,
        &["README.md", "AGENTS.md", "SECURITY.md"],
        SCRUB_DOC_NEEDLES,
    );
    if !s.found() {
        for dir in SCRUB_SOURCE_DIRS {
            let sources: Vec<&str> = p
                .evidence
                .index()
                .files_under(dir)
                .filter(|f| SOURCE_EXTENSIONS.iter().any(|ext| f.ends_with(ext)))
                .take(MAX_SCRUB_SCAN)
                .collect();
            if s.text_any(p.evidence, &sources, &["redact", "scrub"]) {
                break;
            }
        }
    }
    s.finish(
        "Log scrubbing/redaction signals found.",
        "No log scrubbing or redaction signals found.",
    )
}

pub fn branch_protection(_: &Probe<'_>) -> Outcome {
    Outcome::non_local(
        "Requires repository host settings (branch protection / required reviews).",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::checks::testing_support::{is_fail, is_pass, Fixture};
    use crate::evaluate::SkipKind;

    #[test]
    fn test_gitignore_minimal_fails() {
        let outcome = Fixture::new().file(".gitignore", "*.log\n").repo(gitignore);
        match outcome {
            Outcome::Fail { reason, evidence } => {
                assert!(reason.contains("0 of the common exclusions"));
                assert_eq!(evidence, vec![".gitignore"]);
            }
            other => panic!("expected fail, got {:?}", other),
        }
    }

    #[test]
    fn test_gitignore_comprehensive() {
        let outcome = Fixture::new()
            .file(".gitignore", "node_modules/\n.env\ndist/\n")
            .repo(gitignore);
        assert!(is_pass(&outcome));
    }

    #[test]
    fn test_gitignore_missing() {
        assert!(is_fail(&Fixture::new().repo(gitignore)));
    }

    #[test]
    fn test_codeowners_in_github_dir() {
        let outcome = Fixture::new()
            .file(".github/CODEOWNERS", "* @org/team")
            .repo(codeowners);
        assert!(is_pass(&outcome));
    }

    #[test]
    fn test_semgrep_config_without_ci_passes() {
        let outcome = Fixture::new().file(".semgrep.yml", "rules: []").repo(sast_scanning);
        assert!(is_pass(&outcome));
    }

    #[test]
    fn test_branch_protection_is_non_local() {
        let outcome = Fixture::new().repo(branch_protection);
        assert!(matches!(
            outcome,
            Outcome::Skipped { kind: SkipKind::NonLocalSignal, .. }
        ));
    }

    #[test]
    fn test_log_scrubbing_in_source() {
        let outcome = Fixture::new()
            .file("src/logging.py", "def redact(record): ...")
            .repo(log_scrubbing);
        assert!(is_pass(&outcome));
    }
}
