//! Testing checks.

use super::{in_scope, package_script, pyproject_tool};
use crate::catalog::Signals;
use crate::evaluate::Outcome;
use crate::evidence::{parent_of, AppKind, Probe};

/// Rust sources scanned for inline test modules before giving up.
const MAX_RUST_SCAN: usize = 200;

const INTEGRATION_DIRS: &[&str] = &[
    "integration",
    "integration_tests",
    "e2e",
    "cypress",
    "playwright",
    "tests/integration",
    "tests/e2e",
    "test/integration",
    "test/e2e",
];

const INTEGRATION_CONFIGS: &[&str] = &[
    "playwright.config.ts",
    "playwright.config.js",
    "cypress.config.ts",
    "cypress.config.js",
];

fn file_name(rel: &str) -> &str {
    rel.rsplit('/').next().unwrap_or(rel)
}

pub fn unit_tests_exist(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    match p.kind() {
        AppKind::Go => {
            if let Some(f) = p.files().find(|f| f.ends_with("_test.go")) {
                s.hit(f);
            }
        }
        AppKind::Python => {
            s.paths(p.evidence, &in_scope(p, &["tests", "test"]));
            if let Some(f) = p.files().find(|f| {
                let name = file_name(f);
                name.ends_with(".py") && (name.starts_with("test_") || name.ends_with("_test.py"))
            }) {
                s.hit(f);
            }
        }
        AppKind::Node => {
            package_script(p, &mut s, &["test"]);
            s.paths(p.evidence, &in_scope(p, &["test", "tests", "__tests__"]));
            if let Some(f) = p
                .files()
                .find(|f| f.contains(".test.") || f.contains(".spec."))
            {
                s.hit(f);
            }
        }
        AppKind::Rust => {
            s.paths(p.evidence, &in_scope(p, &["tests"]));
            if !s.found() {
                let sources: Vec<&str> = p
                    .files()
                    .filter(|f| f.ends_with(".rs"))
                    .take(MAX_RUST_SCAN)
                    .collect();
                for f in sources {
                    if let Some(text) = s.text(p.evidence, f) {
                        if text.contains_any(&["#[test]", "#[cfg(test)]", "#[tokio::test]"]) {
                            s.hit(f);
                            break;
                        }
                    }
                }
            }
        }
        AppKind::Java => {
            s.paths(p.evidence, &in_scope(p, &["src/test"]));
        }
        AppKind::Dotnet => {
            s.paths(p.evidence, &in_scope(p, &["tests", "test"]));
            if let Some(f) = p.files().find(|f| {
                f.ends_with(".csproj") && file_name(f).to_lowercase().contains("test")
            }) {
                s.hit(f);
            }
        }
        AppKind::Unknown => {
            s.paths(p.evidence, &in_scope(p, &["tests", "test"]));
        }
    }
    s.finish("Test files/directories detected.", "No unit test signals detected.")
}

fn ci_runs_tests(p: &Probe<'_>, s: &mut Signals) -> bool {
    s.ci_any(p.evidence, &["test"])
}

pub fn unit_tests_runnable(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    let (pass, fail) = match p.kind() {
        AppKind::Go => {
            s.paths(p.evidence, &in_scope(p, &["go.mod"]));
            ("Go tests run with `go test ./...`.", "No go.mod, so `go test` has no module to run.")
        }
        AppKind::Rust => {
            s.paths(p.evidence, &in_scope(p, &["Cargo.toml"]));
            ("Rust tests run with `cargo test`.", "No Cargo.toml for `cargo test`.")
        }
        AppKind::Java => {
            s.paths(p.evidence, &in_scope(p, &["pom.xml", "build.gradle", "build.gradle.kts"]));
            ("Tests run through the Maven/Gradle build.", "No Maven or Gradle build to run tests.")
        }
        AppKind::Dotnet => {
            if let Some(f) = p.files().find(|f| f.ends_with(".csproj")) {
                s.hit(f);
            }
            ("Tests run with `dotnet test`.", "No project file for `dotnet test`.")
        }
        AppKind::Python => {
            pyproject_tool(p, &mut s, &["pytest"]);
            s.paths(p.evidence, &in_scope(p, &["pytest.ini", "tox.ini", "conftest.py"]));
            if !s.found() {
                ci_runs_tests(p, &mut s);
            }
            (
                "A pytest configuration or CI test job defines how tests run.",
                "No test runner configuration or CI test job found.",
            )
        }
        AppKind::Node => {
            package_script(p, &mut s, &["test"]);
            if !s.found() {
                ci_runs_tests(p, &mut s);
            }
            (
                "A `test` script or CI test job defines how tests run.",
                "No `test` script in package.json and no CI test job.",
            )
        }
        AppKind::Unknown => {
            ci_runs_tests(p, &mut s);
            (
                "Repo CI runs tests.",
                "Application type unknown and no CI test job defines a test command.",
            )
        }
    };
    s.finish(pass, fail)
}

pub fn ci_test_job(p: &Probe<'_>) -> Outcome {
    if !p.evidence.has_ci() {
        return Outcome::fail("No CI configuration detected, so tests never run in CI.");
    }
    let mut s = Signals::new();
    ci_runs_tests(p, &mut s);
    s.finish("CI appears to run tests.", "CI detected, but no test job found.")
}

pub fn integration_tests(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, &in_scope(p, INTEGRATION_DIRS));
    s.paths(p.evidence, &in_scope(p, INTEGRATION_CONFIGS));
    if p.kind() == AppKind::Rust {
        // Cargo treats every file in tests/ as an integration test.
        let tests_dir = p.path("tests");
        if let Some(f) = p
            .files()
            .find(|f| f.ends_with(".rs") && parent_of(f) == tests_dir)
        {
            s.hit(f);
        }
    }
    if !s.found() && p.is_library() {
        return Outcome::not_applicable(
            "Application is a library; integration tests are not applicable.",
        );
    }
    s.finish(
        "Integration/E2E test signals detected.",
        "No integration/E2E test signals detected.",
    )
}

pub fn coverage_tracking(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.ci_any(
        p.evidence,
        &[
            "codecov",
            "coveralls",
            "coverage",
            "--cov",
            "nyc",
            "istanbul",
            "tarpaulin",
            "llvm-cov",
            "jacoco",
        ],
    );
    s.paths(
        p.evidence,
        &[".coveragerc", "codecov.yml", ".codecov.yml", ".nycrc", ".nycrc.json"],
    );
    s.finish(
        "Coverage tracking evidence found.",
        "No coverage tracking found in CI or config.",
    )
}

pub fn coverage_threshold(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.ci_where(p.evidence, |t| {
        t.contains_any(&["coverage", "tarpaulin", "llvm-cov"])
            && t.contains_any(&["fail-under", "fail_under", "threshold", "--fail-under-lines"])
    });
    s.text_any(p.evidence, &[".coveragerc", "pyproject.toml", "setup.cfg"], &["fail_under"]);
    s.text_any(
        p.evidence,
        &["package.json", "jest.config.js", "jest.config.ts"],
        &["coveragethreshold"],
    );
    s.text_any(p.evidence, &["codecov.yml", ".codecov.yml"], &["target:"]);
    s.finish(
        "Coverage threshold is enforced.",
        "No enforced coverage threshold found.",
    )
}

pub fn flaky_tests(p: &Probe<'_>) -> Outcome {
    if !p.evidence.has_ci() {
        return Outcome::fail("No CI configuration detected, so flaky tests are not tracked.");
    }
    let mut s = Signals::new();
    s.ci_where(p.evidence, |t| {
        t.contains_any(&["flaky", "buildpulse", "rerunfailures", "rerun-failed", "nextest"])
            || t.contains_all(&["retry", "test"])
    });
    s.finish(
        "Flaky test detection signals found.",
        "No flaky test detection (retries, quarantine, rerun tooling) found.",
    )
}

pub fn test_timing(p: &Probe<'_>) -> Outcome {
    if !p.evidence.has_ci() {
        return Outcome::fail("No CI configuration detected, so test timings are not tracked.");
    }
    let mut s = Signals::new();
    s.ci_any(
        p.evidence,
        &[
            "--durations",
            "test timing",
            "benchmark",
            "cargo bench",
            "go test -bench",
            "--reporter=junit",
            "junit",
        ],
    );
    s.finish(
        "Test timing/benchmark signals found.",
        "No test timing or benchmark tracking found.",
    )
}
