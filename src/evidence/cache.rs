//! Per-run evidence context.
//!
//! The `Evidence` struct provides:
//! - A lazily built index of the (non-excluded) repository tree
//! - Memoized text reads, one read per file per run
//! - Memoized JSON/YAML/TOML parses
//! - Glob and CI-definition lookups over the index

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use globset::{Glob, GlobSetBuilder};
use once_cell::sync::OnceCell;

use super::exclude::ExcludeSet;
use super::facts::{parse_config, read_text, ConfigFact, TextFact};
use super::index::RepoIndex;

/// CI definition files recognised outside `.github/workflows/`.
pub const CI_FILES: &[&str] = &[
    ".gitlab-ci.yml",
    "azure-pipelines.yml",
    ".circleci/config.yml",
    "Jenkinsfile",
];

const WORKFLOW_DIR: &str = ".github/workflows";

/// Evidence collected for one repository during one run.
pub struct Evidence {
    root: PathBuf,
    excludes: ExcludeSet,
    index: OnceCell<RepoIndex>,
    /// Cached text facts, keyed by relative path.
    texts: RwLock<HashMap<String, TextFact>>,
    /// Cached config facts, keyed by relative path.
    configs: RwLock<HashMap<String, ConfigFact>>,
}

impl Evidence {
    pub fn new<P: AsRef<Path>>(root: P, excludes: ExcludeSet) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            excludes,
            index: OnceCell::new(),
            texts: RwLock::new(HashMap::new()),
            configs: RwLock::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The repository index, walked on first use.
    pub fn index(&self) -> &RepoIndex {
        self.index
            .get_or_init(|| RepoIndex::build(&self.root, &self.excludes))
    }

    pub fn is_file(&self, rel: &str) -> bool {
        self.index().has_file(normalize(rel))
    }

    pub fn is_dir(&self, rel: &str) -> bool {
        self.index().has_dir(normalize(rel))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.is_file(rel) || self.is_dir(rel)
    }

    /// The subset of `candidates` that exist, in the given order.
    pub fn existing(&self, candidates: &[&str]) -> Vec<String> {
        candidates
            .iter()
            .filter(|c| self.exists(c))
            .map(|c| normalize(c).to_string())
            .collect()
    }

    /// Text of a file. Excluded and absent files are `Missing`.
    pub fn text(&self, rel: &str) -> TextFact {
        let rel = normalize(rel);
        {
            let cache = self.texts.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(fact) = cache.get(rel) {
                return fact.clone();
            }
        }

        let fact = if self.index().has_file(rel) {
            read_text(&self.root.join(rel))
        } else {
            TextFact::Missing
        };
        if let TextFact::Unreadable(err) = &fact {
            tracing::warn!(path = rel, error = %err, "file unreadable");
        }

        let mut cache = self.texts.write().unwrap_or_else(PoisonError::into_inner);
        cache.entry(rel.to_string()).or_insert(fact).clone()
    }

    /// Parsed contents of a JSON, YAML or TOML file.
    pub fn config(&self, rel: &str) -> ConfigFact {
        let rel = normalize(rel);
        {
            let cache = self.configs.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(fact) = cache.get(rel) {
                return fact.clone();
            }
        }

        let text = self.text(rel);
        let fact = parse_config(Path::new(rel), &text);
        if let ConfigFact::Malformed(err) = &fact {
            tracing::warn!(path = rel, error = %err, "config file could not be parsed");
        }

        let mut cache = self.configs.write().unwrap_or_else(PoisonError::into_inner);
        cache.entry(rel.to_string()).or_insert(fact).clone()
    }

    /// Indexed files (and directories) matching any of `patterns`, sorted.
    pub fn glob(&self, patterns: &[&str]) -> Vec<String> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => tracing::warn!(pattern, error = %e, "ignoring invalid pattern"),
            }
        }
        let set = match builder.build() {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(error = %e, "failed to build pattern set");
                return Vec::new();
            }
        };

        let index = self.index();
        let mut hits: Vec<String> = index
            .files
            .iter()
            .chain(index.dirs.iter())
            .filter(|p| set.is_match(p.as_str()))
            .cloned()
            .collect();
        hits.sort();
        hits
    }

    /// Workflow files directly under `.github/workflows/`.
    pub fn workflows(&self) -> Vec<String> {
        self.index()
            .files_in(WORKFLOW_DIR)
            .filter(|f| f.ends_with(".yml") || f.ends_with(".yaml"))
            .map(str::to_string)
            .collect()
    }

    /// Every CI definition file in the repository.
    pub fn ci_files(&self) -> Vec<String> {
        let mut files = self.workflows();
        files.extend(self.existing(CI_FILES));
        files
    }

    /// Whether any CI system is configured.
    pub fn has_ci(&self) -> bool {
        self.is_dir(WORKFLOW_DIR) || !self.ci_files().is_empty()
    }
}

/// Strip `./` prefixes and trailing slashes.
pub fn normalize(rel: &str) -> &str {
    let mut rel = rel.trim_end_matches('/');
    while let Some(rest) = rel.strip_prefix("./") {
        rel = rest;
    }
    if rel.is_empty() {
        "."
    } else {
        rel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepoConfig;
    use std::fs;
    use tempfile::TempDir;

    fn evidence(temp: &TempDir) -> Evidence {
        let excludes = ExcludeSet::from_config(&RepoConfig::default()).unwrap();
        Evidence::new(temp.path(), excludes)
    }

    #[test]
    fn test_text_is_memoized() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "first").unwrap();
        let ev = evidence(&temp);

        let first = ev.text("README.md");
        fs::write(temp.path().join("README.md"), "second").unwrap();
        let second = ev.text("./README.md");

        assert_eq!(first.text().unwrap().raw, "first");
        assert_eq!(second.text().unwrap().raw, "first");
    }

    #[test]
    fn test_excluded_file_is_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("dist")).unwrap();
        fs::write(temp.path().join("dist/README.md"), "x").unwrap();
        let ev = evidence(&temp);
        assert!(matches!(ev.text("dist/README.md"), TextFact::Missing));
        assert!(!ev.exists("dist"));
    }

    #[test]
    fn test_ci_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".github/workflows")).unwrap();
        fs::write(temp.path().join(".github/workflows/ci.yml"), "").unwrap();
        fs::write(temp.path().join(".github/workflows/notes.txt"), "").unwrap();
        fs::write(temp.path().join(".gitlab-ci.yml"), "").unwrap();
        let ev = evidence(&temp);

        assert!(ev.has_ci());
        assert_eq!(
            ev.ci_files(),
            vec![".github/workflows/ci.yml".to_string(), ".gitlab-ci.yml".to_string()]
        );
    }

    #[test]
    fn test_glob_matches_files_and_dirs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs/architecture")).unwrap();
        fs::write(temp.path().join("docs/flow.mmd"), "").unwrap();
        let ev = evidence(&temp);

        let hits = ev.glob(&["**/*.mmd", "**/architecture"]);
        assert_eq!(hits, vec!["docs/architecture".to_string(), "docs/flow.mmd".to_string()]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("./a/b/"), "a/b");
        assert_eq!(normalize("./"), ".");
        assert_eq!(normalize("."), ".");
    }
}
