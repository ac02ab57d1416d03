//! Code quality checks. All of them look for tooling, never at the code.

use super::manifests_mention;
use crate::catalog::Signals;
use crate::evaluate::Outcome;
use crate::evidence::Probe;

const ESLINT_CONFIGS: &[&str] = &[
    ".eslintrc",
    ".eslintrc.js",
    ".eslintrc.cjs",
    ".eslintrc.json",
    ".eslintrc.yml",
    ".eslintrc.yaml",
    "eslint.config.js",
    "eslint.config.mjs",
];

const GOLANGCI_CONFIGS: &[&str] = &[".golangci.yml", ".golangci.yaml"];

/// Record CI definitions and manifests in scope mentioning any tool.
fn tool_in_ci_or_manifests(p: &Probe<'_>, s: &mut Signals, tools: &[&str]) {
    s.ci_any(p.evidence, tools);
    manifests_mention(p, s, tools);
}

pub fn unused_deps(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    tool_in_ci_or_manifests(
        p,
        &mut s,
        &[
            "depcheck",
            "knip",
            "pip-extra-reqs",
            "deptry",
            "go mod tidy",
            "cargo udeps",
            "cargo-udeps",
            "cargo machete",
            "cargo-machete",
        ],
    );
    s.finish(
        "Unused dependency detection signals found.",
        "No unused dependency detection found.",
    )
}

pub fn complexity(p: &Probe<'_>) -> Outcome {
    let needles = &[
        "radon",
        "lizard",
        "gocyclo",
        "gocognit",
        "cognitive_complexity",
        "cognitive-complexity",
        "sonarqube",
        "mccabe",
    ];
    let mut s = Signals::new();
    tool_in_ci_or_manifests(p, &mut s, needles);
    s.text_where(p.evidence, ESLINT_CONFIGS, |t| t.contains_any(&["complexity"]));
    s.text_any(p.evidence, GOLANGCI_CONFIGS, &["gocyclo", "gocognit", "cyclop"]);
    s.text_any(p.evidence, &["clippy.toml", ".clippy.toml"], &["cognitive-complexity-threshold"]);
    s.finish(
        "Complexity analysis signals found.",
        "No complexity analysis tooling found.",
    )
}

pub fn dead_code(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    tool_in_ci_or_manifests(
        p,
        &mut s,
        &["vulture", "ts-prune", "knip", "unimported", "deadcode"],
    );
    s.text_any(p.evidence, GOLANGCI_CONFIGS, &["unused", "deadcode"]);
    s.finish(
        "Dead code detection signals found.",
        "No dead code detection tooling found.",
    )
}

pub fn dup_code(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.ci_any(p.evidence, &["jscpd", "pmd cpd", "duplication", "sonarqube", "dupl"]);
    s.paths(p.evidence, &[".jscpd.json"]);
    s.text_any(p.evidence, GOLANGCI_CONFIGS, &["dupl"]);
    s.finish(
        "Duplicate code detection signals found.",
        "No duplicate code detection tooling found.",
    )
}

pub fn module_boundaries(p: &Probe<'_>) -> Outcome {
    let markers = &["boundar", "import-linter", "importlinter", "depguard", "dependency-cruiser"];
    let mut s = Signals::new();
    s.ci_any(p.evidence, markers);
    s.text_any(
        p.evidence,
        &[
            "pyproject.toml",
            "package.json",
            ".golangci.yml",
            ".golangci.yaml",
            "nx.json",
            ".importlinter",
            ".dependency-cruiser.js",
        ],
        markers,
    );
    s.finish(
        "Module boundary enforcement signals found.",
        "No module boundary enforcement found.",
    )
}

pub fn todo_tracking(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.ci_where(p.evidence, |t| {
        (t.contains_any(&["todo"]) && t.contains_any(&["fail", "grep"]))
            || t.contains_any(&["todor", "todo-check", "todocheck"])
    });
    s.text_where(p.evidence, ESLINT_CONFIGS, |t| {
        t.contains_any(&["no-warning-comments"]) || t.contains_all(&["todo", "ticket"])
    });
    s.text_where(p.evidence, &["pyproject.toml"], |t| t.contains_all(&["todo", "ticket"]));
    s.text_any(p.evidence, GOLANGCI_CONFIGS, &["godox"]);
    s.text_any(p.evidence, &["clippy.toml", ".clippy.toml"], &["todo"]);
    s.finish(
        "Tech debt tracking/TODO policy signals found.",
        "No tech debt tracking or TODO policy found.",
    )
}
