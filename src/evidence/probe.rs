//! The view a criterion check gets of the repository.

use super::cache::Evidence;
use super::discovery::{AppKind, Application};
use super::facts::{ConfigFact, TextFact};
use crate::config::{RepoConfig, RepoKind};

/// Evidence scoped to one evaluation: the whole repository, or one
/// application within it.
#[derive(Clone, Copy)]
pub struct Probe<'a> {
    pub evidence: &'a Evidence,
    pub config: &'a RepoConfig,
    pub apps: &'a [Application],
    pub app: Option<&'a Application>,
}

impl<'a> Probe<'a> {
    pub fn repo(evidence: &'a Evidence, config: &'a RepoConfig, apps: &'a [Application]) -> Self {
        Self {
            evidence,
            config,
            apps,
            app: None,
        }
    }

    pub fn for_app(self, app: &'a Application) -> Self {
        Self {
            app: Some(app),
            ..self
        }
    }

    /// Root of the current scope (`"."` for repository scope).
    pub fn root(&self) -> &'a str {
        self.app.map(|a| a.path.as_str()).unwrap_or(".")
    }

    pub fn kind(&self) -> AppKind {
        self.app.map(|a| a.kind).unwrap_or(AppKind::Unknown)
    }

    /// Path of `rel` inside the current scope.
    pub fn path(&self, rel: &str) -> String {
        match self.app {
            Some(app) => app.join(rel),
            None => rel.to_string(),
        }
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.evidence.exists(&self.path(rel))
    }

    pub fn text(&self, rel: &str) -> TextFact {
        self.evidence.text(&self.path(rel))
    }

    pub fn config(&self, rel: &str) -> ConfigFact {
        self.evidence.config(&self.path(rel))
    }

    /// Files beneath the current scope, relative to the repository root.
    pub fn files(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.evidence.index().files_under(self.root())
    }

    /// Whether the repository declares itself a library, or this
    /// application describes itself as one.
    pub fn is_library(&self) -> bool {
        matches!(self.config.repo_kind, Some(RepoKind::Library))
            || self.app.map(|a| a.looks_like_library()).unwrap_or(false)
    }
}
