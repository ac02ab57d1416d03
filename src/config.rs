//! Repository configuration for readycheck.
//!
//! The configuration lives in an optional `.readycheck.json` at the
//! repository root. Every key is optional; an absent file means full
//! auto-detection with the default excludes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};

use crate::error::{EvalError, Result};

/// Name of the config file looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".readycheck.json";

/// Depth used for application discovery when the config does not set one.
pub const DEFAULT_DISCOVERY_DEPTH: usize = 4;

/// Upper bound accepted for `app_discovery_max_depth`.
pub const MAX_DISCOVERY_DEPTH: usize = 32;

/// Directory names that are never walked.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "dist",
    "build",
    "target",
    ".venv",
    "venv",
    ".tox",
    ".pytest_cache",
    "__pycache__",
    ".mypy_cache",
    ".ruff_cache",
    "vendor",
    ".idea",
    ".vscode",
];

/// Glob patterns that are always excluded from discovery and evidence.
pub const DEFAULT_EXCLUDE_GLOBS: &[&str] = &[
    "**/.git/**",
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/target/**",
    "**/.venv/**",
    "**/venv/**",
    "**/.tox/**",
    "**/__pycache__/**",
];

/// Declared shape of the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoKind {
    Service,
    Library,
    Cli,
    Monorepo,
}

impl std::fmt::Display for RepoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoKind::Service => write!(f, "service"),
            RepoKind::Library => write!(f, "library"),
            RepoKind::Cli => write!(f, "cli"),
            RepoKind::Monorepo => write!(f, "monorepo"),
        }
    }
}

/// How `next_level_target` is derived from the blocking level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextLevelPolicy {
    /// The blocking level itself is the target.
    #[default]
    Blocking,
    /// The level that unlocks once the blocking level clears the threshold.
    AfterBlocking,
}

/// Top-level `.readycheck.json` definition.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct RepoConfig {
    /// Cosmetic organisation name shown in reports.
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub repo_kind: Option<RepoKind>,
    /// Explicit application roots, relative to the repository root.
    #[serde(default)]
    pub app_roots: Vec<String>,
    /// Extra glob patterns to exclude (e.g. "**/generated/**").
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    /// Extra directory names pruned anywhere in the tree.
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
    #[serde(default)]
    pub app_discovery_max_depth: Option<usize>,
    #[serde(default)]
    pub next_level_policy: Option<NextLevelPolicy>,
    /// Owner handle suggested for a scaffolded CODEOWNERS file.
    #[serde(default)]
    pub default_codeowner: Option<String>,
}

impl RepoConfig {
    /// Parse a config from a JSON file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| EvalError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| EvalError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `.readycheck.json` from the repository root, or the defaults
    /// when the file does not exist.
    pub fn load(repo_root: &Path) -> Result<Self> {
        let path = repo_root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let config = Self::parse_file(&path)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Returns the discovery depth (defaults to 4).
    pub fn discovery_depth(&self) -> usize {
        self.app_discovery_max_depth
            .unwrap_or(DEFAULT_DISCOVERY_DEPTH)
    }

    /// Returns the next-level policy (defaults to `Blocking`).
    pub fn next_level_policy(&self) -> NextLevelPolicy {
        self.next_level_policy.unwrap_or_default()
    }

    pub fn org_name(&self) -> &str {
        self.org_name.as_deref().unwrap_or("")
    }

    /// Whether the repo declares itself as something without a running
    /// service (library or CLI).
    pub fn declares_non_service(&self) -> bool {
        matches!(self.repo_kind, Some(RepoKind::Library) | Some(RepoKind::Cli))
    }

    /// Default plus configured exclude globs, in a stable order.
    pub fn exclude_globs(&self) -> Vec<String> {
        DEFAULT_EXCLUDE_GLOBS
            .iter()
            .map(|g| g.to_string())
            .chain(self.exclude_globs.iter().cloned())
            .collect()
    }

    /// Default plus configured excluded directory names.
    pub fn exclude_dirs(&self) -> Vec<String> {
        DEFAULT_EXCLUDE_DIRS
            .iter()
            .map(|d| d.to_string())
            .chain(self.exclude_dirs.iter().cloned())
            .collect()
    }
}

/// Validate a config for correctness.
pub fn validate(config: &RepoConfig) -> Result<()> {
    for pattern in &config.exclude_globs {
        globset::Glob::new(pattern).map_err(|source| EvalError::InvalidGlob {
            pattern: pattern.clone(),
            source,
        })?;
    }

    if let Some(depth) = config.app_discovery_max_depth {
        if depth > MAX_DISCOVERY_DEPTH {
            return Err(EvalError::InvalidConfig(format!(
                "app_discovery_max_depth {} exceeds the maximum of {}",
                depth, MAX_DISCOVERY_DEPTH
            )));
        }
    }

    // App roots are taken verbatim but must stay inside the repository.
    for root in &config.app_roots {
        let path = Path::new(root);
        let escapes = path.is_absolute()
            || path
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if escapes {
            return Err(EvalError::InvalidConfig(format!(
                "app root {:?} must be a path relative to the repository root",
                root
            )));
        }
    }

    for dir in &config.exclude_dirs {
        if dir.is_empty() || dir.contains('/') {
            return Err(EvalError::InvalidConfig(format!(
                "exclude_dirs entry {:?} must be a single directory name",
                dir
            )));
        }
    }

    Ok(())
}
