//! Style and validation checks.

use super::{in_scope, pyproject_tool};
use crate::catalog::Signals;
use crate::evaluate::Outcome;
use crate::evidence::{AppKind, Probe};

const ESLINT_CONFIGS: &[&str] = &[
    ".eslintrc",
    ".eslintrc.js",
    ".eslintrc.cjs",
    ".eslintrc.json",
    ".eslintrc.yml",
    ".eslintrc.yaml",
    "eslint.config.js",
    "eslint.config.mjs",
    "eslint.config.cjs",
];

const BIOME_CONFIGS: &[&str] = &["biome.json", ".biome.json"];

const PRETTIER_CONFIGS: &[&str] = &[
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.yml",
    ".prettierrc.yaml",
    ".prettierrc.js",
    "prettier.config.js",
];

const TSCONFIGS: &[&str] = &["tsconfig.json", "tsconfig.base.json", "tsconfig.app.json"];

const PRE_COMMIT_CONFIG: &str = ".pre-commit-config.yaml";

pub fn lint_config(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, &in_scope(p, ESLINT_CONFIGS));
    s.paths(p.evidence, &in_scope(p, BIOME_CONFIGS));
    pyproject_tool(p, &mut s, &["ruff", "flake8", "pylint"]);
    s.paths(
        p.evidence,
        &in_scope(p, &["ruff.toml", ".ruff.toml", ".flake8", ".pylintrc", "setup.cfg", "tox.ini"]),
    );
    let configs = in_scope(
        p,
        &[".golangci.yml", ".golangci.yaml", "clippy.toml", ".clippy.toml"],
    );
    s.paths(p.evidence, &configs);
    match p.kind() {
        AppKind::Go => {
            s.ci_any(p.evidence, &["golangci-lint"]);
        }
        AppKind::Rust => {
            s.ci_any(p.evidence, &["clippy"]);
        }
        _ => {}
    }
    s.finish("Linter config/tooling detected.", "No linter config/tooling detected.")
}

pub fn formatter(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    match p.kind() {
        AppKind::Go => s.hit("gofmt (language standard)"),
        AppKind::Rust => s.hit("rustfmt (language standard)"),
        _ => {}
    }
    s.paths(p.evidence, &in_scope(p, PRETTIER_CONFIGS));
    s.paths(p.evidence, &in_scope(p, BIOME_CONFIGS));
    s.paths(p.evidence, &in_scope(p, &["rustfmt.toml", ".rustfmt.toml", ".editorconfig"]));
    pyproject_tool(p, &mut s, &["black", "ruff"]);
    s.finish(
        "Formatter config/tooling detected.",
        "No formatter config/tooling detected.",
    )
}

/// Whether a tsconfig in scope turns on strict mode (or its core flags).
fn tsconfig_strict(p: &Probe<'_>, s: &mut Signals) -> bool {
    let mut any = false;
    for rel in in_scope(p, TSCONFIGS) {
        let Some(tsconfig) = s.config(p.evidence, &rel) else {
            continue;
        };
        let Some(options) = tsconfig.get("compilerOptions") else {
            continue;
        };
        let flag = |name: &str| options.get(name).and_then(|v| v.as_bool()) == Some(true);
        if flag("strict") || (flag("noImplicitAny") && flag("strictNullChecks")) {
            s.hit(format!("{} (strict)", rel));
            any = true;
        }
    }
    any
}

pub fn type_check(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    match p.kind() {
        AppKind::Go | AppKind::Rust | AppKind::Java | AppKind::Dotnet => {
            s.hit(format!("{} is statically typed", p.kind()));
        }
        _ => {}
    }
    tsconfig_strict(p, &mut s);
    pyproject_tool(p, &mut s, &["mypy", "pyright"]);
    s.paths(p.evidence, &in_scope(p, &["mypy.ini", ".mypy.ini", "pyrightconfig.json"]));
    s.finish(
        "Type checking detected (or inherent in language).",
        "No type checking signals detected.",
    )
}

pub fn pre_commit_hooks(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, &[PRE_COMMIT_CONFIG, "lefthook.yml", "lefthook.yaml", ".husky"]);
    if p.root() != "." {
        s.paths(p.evidence, &in_scope(p, &[".husky", "lefthook.yml"]));
    }
    let manifest_rel = p.path("package.json");
    if let Some(manifest) = s.config(p.evidence, &manifest_rel) {
        let in_dev_deps = manifest
            .get("devDependencies")
            .and_then(|d| d.get("husky"))
            .is_some();
        if manifest.get("husky").is_some() || in_dev_deps {
            s.hit(format!("{} (husky)", manifest_rel));
        }
        if manifest.get("lint-staged").is_some() {
            s.hit(format!("{} (lint-staged)", manifest_rel));
        }
    }
    s.finish(
        "Pre-commit / git hook tooling detected.",
        "No pre-commit / git hook tooling detected.",
    )
}

pub fn large_file_detection(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.text_any(p.evidence, &[".gitattributes"], &["lfs"]);
    s.text_any(p.evidence, &[PRE_COMMIT_CONFIG], &["check-added-large-files"]);
    s.finish(
        "Large-file detection appears configured.",
        "No large-file hooks or LFS policy found.",
    )
}

pub fn ci_lint_job(p: &Probe<'_>) -> Outcome {
    if !p.evidence.has_ci() {
        return Outcome::fail("No CI configuration detected, so linting is not enforced in CI.");
    }
    let mut s = Signals::new();
    s.ci_any(p.evidence, &["lint", "clippy", "ruff check", "golangci"]);
    s.finish(
        "CI appears to run lint/validation.",
        "CI detected, but no lint job found.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::checks::testing_support::{is_fail, is_pass, Fixture};

    #[test]
    fn test_eslint_config_counts_as_linter() {
        let outcome = Fixture::new()
            .file("package.json", "{}")
            .file("eslint.config.js", "export default []")
            .app(lint_config);
        assert!(is_pass(&outcome));
    }

    #[test]
    fn test_ruff_in_pyproject() {
        let outcome = Fixture::new()
            .file("pyproject.toml", "[project]\nname = \"x\"\n\n[tool.ruff]\nline-length = 100\n")
            .app(lint_config);
        assert!(is_pass(&outcome));
    }

    #[test]
    fn test_rust_linter_requires_clippy_in_ci() {
        let bare = Fixture::new()
            .file("Cargo.toml", "[package]\nname = \"x\"\n")
            .app(lint_config);
        assert!(is_fail(&bare));

        let with_ci = Fixture::new()
            .file("Cargo.toml", "[package]\nname = \"x\"\n")
            .file(".github/workflows/ci.yml", "run: cargo clippy -- -D warnings")
            .app(lint_config);
        assert!(is_pass(&with_ci));
    }

    #[test]
    fn test_go_formatter_is_inherent() {
        let outcome = Fixture::new().file("go.mod", "module x").app(formatter);
        assert!(is_pass(&outcome));
    }

    #[test]
    fn test_tsconfig_strict() {
        let strict = Fixture::new()
            .file("package.json", "{}")
            .file("tsconfig.json", r#"{"compilerOptions": {"strict": true}}"#)
            .app(type_check);
        assert!(is_pass(&strict));

        let loose = Fixture::new()
            .file("package.json", "{}")
            .file("tsconfig.json", r#"{"compilerOptions": {"strict": false}}"#)
            .app(type_check);
        assert!(is_fail(&loose));
    }

    #[test]
    fn test_husky_dev_dependency() {
        let outcome = Fixture::new()
            .file("package.json", r#"{"devDependencies": {"husky": "^9.0.0"}}"#)
            .app(pre_commit_hooks);
        assert!(is_pass(&outcome));
    }

    #[test]
    fn test_large_file_hook() {
        let outcome = Fixture::new()
            .file(
                ".pre-commit-config.yaml",
                "repos:\n  - hooks:\n      - id: check-added-large-files\n",
            )
            .repo(large_file_detection);
        assert!(is_pass(&outcome));
    }

    #[test]
    fn test_ci_lint_job_without_ci_fails() {
        assert!(is_fail(&Fixture::new().repo(ci_lint_job)));
    }
}
