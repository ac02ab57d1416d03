//! Criterion checks, one module per pillar.
//!
//! Every check takes a [`Probe`] and returns an [`Outcome`]. Checks never
//! skip a locally observable signal: when they cannot find it, they fail
//! with notes. Skips are reserved for signals that live outside the
//! working tree and for criteria that do not apply to the scope.

pub mod build;
pub mod devenv;
pub mod docs;
pub mod observability;
pub mod quality;
pub mod security;
pub mod style;
pub mod testing;

use super::Signals;
use crate::evidence::{Application, Probe};

/// Manifests consulted when looking for declared dependencies.
pub const DEPENDENCY_MANIFESTS: &[&str] = &[
    "package.json",
    "pyproject.toml",
    "requirements.txt",
    "go.mod",
    "Cargo.toml",
    "pom.xml",
    "build.gradle",
    "build.gradle.kts",
];

/// Top-level docs that commonly carry commands and operational notes.
pub const ROOT_DOCS: &[&str] = &["README.md", "AGENTS.md", "docs/README.md"];

/// Applications covered by a probe: its own app, or all of them at repo
/// scope.
fn scoped_apps<'a>(p: &Probe<'a>) -> Vec<&'a Application> {
    match p.app {
        Some(app) => vec![app],
        None => p.apps.iter().collect(),
    }
}

/// Record dependency manifests in scope whose text mentions any needle.
pub fn manifests_mention(p: &Probe<'_>, s: &mut Signals, needles: &[&str]) -> bool {
    let files: Vec<String> = scoped_apps(p)
        .iter()
        .flat_map(|app| DEPENDENCY_MANIFESTS.iter().map(move |m| app.join(m)))
        .chain(
            p.evidence
                .index()
                .files_under(p.root())
                .filter(|f| f.ends_with(".csproj"))
                .map(str::to_string),
        )
        .collect();
    s.text_any(p.evidence, &files, needles)
}

/// Whether `package.json` in scope defines any of the named scripts.
pub fn package_script(p: &Probe<'_>, s: &mut Signals, names: &[&str]) -> bool {
    let rel = p.path("package.json");
    let Some(manifest) = s.config(p.evidence, &rel) else {
        return false;
    };
    let Some(scripts) = manifest.get("scripts").and_then(|v| v.as_object()) else {
        return false;
    };
    let mut any = false;
    for name in names {
        if scripts.contains_key(*name) {
            s.hit(format!("{} (script \"{}\")", rel, name));
            any = true;
        }
    }
    any
}

/// Whether `pyproject.toml` in scope has a `[tool.<key>]` table.
pub fn pyproject_tool(p: &Probe<'_>, s: &mut Signals, keys: &[&str]) -> bool {
    let rel = p.path("pyproject.toml");
    let Some(manifest) = s.config(p.evidence, &rel) else {
        return false;
    };
    let Some(tool) = manifest.get("tool").and_then(|v| v.as_object()) else {
        return false;
    };
    let mut any = false;
    for key in keys {
        if tool.contains_key(*key) {
            s.hit(format!("{} [tool.{}]", rel, key));
            any = true;
        }
    }
    any
}

/// Paths of `candidates` inside the probe's scope.
pub fn in_scope(p: &Probe<'_>, candidates: &[&str]) -> Vec<String> {
    candidates.iter().map(|c| p.path(c)).collect()
}

#[cfg(test)]
pub(crate) mod testing_support {
    use std::fs;
    use std::path::Path;

    use crate::config::RepoConfig;
    use crate::evaluate::Outcome;
    use crate::evidence::{discover_apps, Application, Evidence, ExcludeSet, Probe};
    use tempfile::TempDir;

    /// A temporary repository with evidence and discovered apps.
    pub struct Fixture {
        pub temp: TempDir,
        pub config: RepoConfig,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self {
                temp: TempDir::new().unwrap(),
                config: RepoConfig::default(),
            }
        }

        pub fn file(self, rel: &str, body: &str) -> Self {
            let path = self.temp.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
            self
        }

        pub fn dir(self, rel: &str) -> Self {
            fs::create_dir_all(self.temp.path().join(rel)).unwrap();
            self
        }

        pub fn root(&self) -> &Path {
            self.temp.path()
        }

        /// Run a repo-scoped check.
        pub fn repo(&self, check: fn(&Probe<'_>) -> Outcome) -> Outcome {
            let evidence = self.evidence();
            let apps = discover_apps(&evidence, &self.config);
            check(&Probe::repo(&evidence, &self.config, &apps))
        }

        /// Run an app-scoped check against the first discovered app.
        pub fn app(&self, check: fn(&Probe<'_>) -> Outcome) -> Outcome {
            let evidence = self.evidence();
            let apps: Vec<Application> = discover_apps(&evidence, &self.config);
            let probe = Probe::repo(&evidence, &self.config, &apps).for_app(&apps[0]);
            check(&probe)
        }

        fn evidence(&self) -> Evidence {
            Evidence::new(self.root(), ExcludeSet::from_config(&self.config).unwrap())
        }
    }

    pub fn is_pass(o: &Outcome) -> bool {
        matches!(o, Outcome::Pass { .. })
    }

    pub fn is_fail(o: &Outcome) -> bool {
        matches!(o, Outcome::Fail { .. })
    }
}
