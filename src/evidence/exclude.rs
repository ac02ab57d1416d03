//! Path exclusion shared by discovery and evidence gathering.

use std::collections::BTreeSet;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::RepoConfig;
use crate::error::{EvalError, Result};

/// Compiled exclusion rules: pruned directory names plus glob patterns
/// matched against repository-relative, `/`-separated paths.
#[derive(Debug, Clone)]
pub struct ExcludeSet {
    dirs: BTreeSet<String>,
    globs: GlobSet,
}

impl ExcludeSet {
    /// Build the exclusion set from the defaults and the repo config.
    pub fn from_config(config: &RepoConfig) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in config.exclude_globs() {
            let glob = Glob::new(&pattern).map_err(|source| EvalError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let globs = builder.build().map_err(|source| EvalError::InvalidGlob {
            pattern: "<exclude set>".to_string(),
            source,
        })?;

        Ok(Self {
            dirs: config.exclude_dirs().into_iter().collect(),
            globs,
        })
    }

    /// Whether a file at `rel_path` is excluded.
    pub fn excludes_file(&self, rel_path: &str) -> bool {
        self.globs.is_match(rel_path)
    }

    /// Whether a directory is excluded, either by its name or because a
    /// glob covers everything beneath it.
    pub fn excludes_dir(&self, name: &str, rel_path: &str) -> bool {
        if self.dirs.contains(name) {
            return true;
        }
        self.globs.is_match(rel_path) || self.globs.is_match(format!("{}/", rel_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ExcludeSet {
        ExcludeSet::from_config(&RepoConfig::default()).unwrap()
    }

    #[test]
    fn test_default_dirs_excluded() {
        let set = defaults();
        assert!(set.excludes_dir("node_modules", "web/node_modules"));
        assert!(set.excludes_dir(".git", ".git"));
        assert!(!set.excludes_dir(".github", ".github"));
        assert!(!set.excludes_dir("src", "src"));
    }

    #[test]
    fn test_default_globs_exclude_files() {
        let set = defaults();
        assert!(set.excludes_file("app/dist/bundle.js"));
        assert!(set.excludes_file("target/debug/build.log"));
        assert!(!set.excludes_file("src/main.rs"));
    }

    #[test]
    fn test_configured_glob_prunes_directory() {
        let config = RepoConfig {
            exclude_globs: vec!["**/fixtures/**".to_string()],
            ..Default::default()
        };
        let set = ExcludeSet::from_config(&config).unwrap();
        assert!(set.excludes_dir("fixtures", "tests/fixtures"));
        assert!(set.excludes_file("tests/fixtures/package.json"));
        assert!(!set.excludes_file("tests/unit.rs"));
    }

    #[test]
    fn test_configured_dir_name() {
        let config = RepoConfig {
            exclude_dirs: vec!["third_party".to_string()],
            ..Default::default()
        };
        let set = ExcludeSet::from_config(&config).unwrap();
        assert!(set.excludes_dir("third_party", "libs/third_party"));
    }
}
