//! Build system checks.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{in_scope, package_script};
use crate::catalog::Signals;
use crate::evaluate::Outcome;
use crate::evidence::Probe;

pub const LOCKFILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "npm-shrinkwrap.json",
    "bun.lockb",
    "poetry.lock",
    "uv.lock",
    "Pipfile.lock",
    "requirements.lock",
    "go.sum",
    "Cargo.lock",
    "Gemfile.lock",
    "packages.lock.json",
    "gradle.lockfile",
];

const BUILD_COMMANDS: &[&str] = &[
    "npm run build",
    "pnpm build",
    "yarn build",
    "make build",
    "go build",
    "cargo build",
    "gradle build",
    "gradlew build",
    "mvn package",
    "dotnet build",
];

static MAKE_BUILD_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^build\s*:").expect("valid regex"));

pub fn deps_pinned(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, &in_scope(p, LOCKFILES));
    // Workspace lockfiles live at the repository root.
    if p.root() != "." {
        s.paths(p.evidence, LOCKFILES);
    }
    s.finish("Lockfile(s) detected.", "No lockfile detected for this app.")
}

pub fn build_cmd_doc(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    package_script(p, &mut s, &["build", "compile"]);

    let mut makefiles = vec!["Makefile".to_string()];
    if p.root() != "." {
        makefiles.push(p.path("Makefile"));
    }
    s.text_where(p.evidence, &makefiles, |t| MAKE_BUILD_TARGET.is_match(&t.lower));

    let mut docs = vec!["README.md".to_string(), "AGENTS.md".to_string()];
    if p.root() != "." {
        docs.push(p.path("README.md"));
    }
    s.text_any(p.evidence, &docs, BUILD_COMMANDS);

    s.finish(
        "Build command is defined or documented.",
        "No build script, Makefile target, or documented build command found.",
    )
}

pub fn ci_configured(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    if p.evidence.is_dir(".github/workflows") {
        s.hit(".github/workflows/");
    }
    for file in p.evidence.ci_files() {
        s.hit(file);
    }
    s.finish("CI configuration detected.", "No CI configuration detected.")
}

pub fn ci_cache(p: &Probe<'_>) -> Outcome {
    if !p.evidence.has_ci() {
        return Outcome::fail("No CI configuration detected, so there is no CI caching.");
    }
    let mut s = Signals::new();
    s.ci_any(p.evidence, &["cache"]);
    s.finish("Caching signals found in CI.", "No caching signals found in CI.")
}

pub fn agent_workflows_present(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(
        p.evidence,
        &[".windsurf/workflows", ".windsurf", ".cursor/rules", ".github/copilot-instructions.md"],
    );
    s.ci_where(p.evidence, |t| t.contains_all(&["schedule", "cron"]));
    s.finish(
        "In-repo automation workflows found.",
        "No in-repo automation workflows or scheduled maintenance jobs found.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::checks::testing_support::{is_fail, is_pass, Fixture};

    #[test]
    fn test_deps_pinned_app_or_root_lockfile() {
        let app_lock = Fixture::new()
            .file("svc/package.json", "{}")
            .file("svc/package-lock.json", "{}")
            .app(deps_pinned);
        assert!(is_pass(&app_lock));

        let root_lock = Fixture::new()
            .file("svc/go.mod", "module svc")
            .file("Cargo.lock", "")
            .app(deps_pinned);
        assert!(is_pass(&root_lock));

        let none = Fixture::new().file("svc/go.mod", "module svc").app(deps_pinned);
        assert!(is_fail(&none));
    }

    #[test]
    fn test_build_cmd_from_makefile() {
        let outcome = Fixture::new()
            .file("go.mod", "module x")
            .file("Makefile", "test:\n\tgo test\nbuild:\n\tgo build ./...\n")
            .app(build_cmd_doc);
        assert!(is_pass(&outcome));
    }

    #[test]
    fn test_build_cmd_from_package_script() {
        let outcome = Fixture::new()
            .file("package.json", r#"{"scripts": {"build": "tsc"}}"#)
            .app(build_cmd_doc);
        assert!(is_pass(&outcome));
    }

    #[test]
    fn test_build_cmd_missing() {
        let outcome = Fixture::new()
            .file("package.json", r#"{"scripts": {"start": "node ."}}"#)
            .app(build_cmd_doc);
        assert!(is_fail(&outcome));
    }

    #[test]
    fn test_ci_cache_without_ci_fails() {
        assert!(is_fail(&Fixture::new().repo(ci_cache)));
    }

    #[test]
    fn test_scheduled_workflow_counts_as_automation() {
        let outcome = Fixture::new()
            .file(".github/workflows/nightly.yml", "on:\n  schedule:\n    - cron: '0 3 * * *'\n")
            .repo(agent_workflows_present);
        assert!(is_pass(&outcome));
    }
}
