//! Application discovery.
//!
//! An application is a directory that owns a project manifest. Discovery
//! either takes the configured `app_roots` verbatim or walks the index up
//! to the configured depth looking for manifests; when nothing is found
//! the whole repository is treated as one application.

use serde::{Deserialize, Serialize};

use super::cache::{normalize, Evidence};
use super::index::{depth_of, join, parent_of};
use crate::config::RepoConfig;

/// Files whose presence marks a directory as an application root.
pub const MANIFEST_MARKERS: &[&str] = &[
    "package.json",
    "pyproject.toml",
    "requirements.txt",
    "go.mod",
    "Cargo.toml",
    "pom.xml",
    "build.gradle",
    "build.gradle.kts",
];

/// Ecosystem of an application, inferred from its manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    Node,
    Python,
    Go,
    Rust,
    Java,
    Dotnet,
    Unknown,
}

impl AppKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppKind::Node => "node",
            AppKind::Python => "python",
            AppKind::Go => "go",
            AppKind::Rust => "rust",
            AppKind::Java => "java",
            AppKind::Dotnet => "dotnet",
            AppKind::Unknown => "unknown",
        }
    }

    /// Human-readable language name, `None` for unknown kinds.
    pub fn language(&self) -> Option<&'static str> {
        match self {
            AppKind::Node => Some("JavaScript/TypeScript"),
            AppKind::Python => Some("Python"),
            AppKind::Go => Some("Go"),
            AppKind::Rust => Some("Rust"),
            AppKind::Java => Some("Java"),
            AppKind::Dotnet => Some(".NET"),
            AppKind::Unknown => None,
        }
    }
}

impl std::fmt::Display for AppKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered application scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Path relative to the repository root; `"."` for the root itself.
    pub path: String,
    pub kind: AppKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Application {
    pub fn depth(&self) -> usize {
        depth_of(&self.path)
    }

    /// Path of `rel` inside this application.
    pub fn join(&self, rel: &str) -> String {
        join(&self.path, rel)
    }

    pub fn looks_like_library(&self) -> bool {
        self.description.to_lowercase().contains("library")
    }
}

fn is_marker(file_name: &str) -> bool {
    MANIFEST_MARKERS.contains(&file_name) || file_name.ends_with(".csproj")
}

/// Discover the application scopes of a repository, sorted by depth and
/// then path.
pub fn discover_apps(evidence: &Evidence, config: &RepoConfig) -> Vec<Application> {
    let mut roots: Vec<String> = if !config.app_roots.is_empty() {
        config
            .app_roots
            .iter()
            .map(|r| normalize(r).to_string())
            .collect()
    } else {
        let max_depth = config.discovery_depth();
        evidence
            .index()
            .files
            .iter()
            .filter(|f| {
                let name = f.rsplit('/').next().unwrap_or(f.as_str());
                is_marker(name)
            })
            .map(|f| parent_of(f).to_string())
            .filter(|dir| depth_of(dir) <= max_depth)
            .collect()
    };

    if roots.is_empty() {
        tracing::debug!("no manifests found, treating repository as a single application");
        roots.push(".".to_string());
    }

    roots.sort_by(|a, b| (depth_of(a), a.as_str()).cmp(&(depth_of(b), b.as_str())));
    roots.dedup();

    for root in &roots {
        if !evidence.is_dir(root) {
            tracing::warn!(path = %root, "configured application root does not exist");
        }
    }

    let apps: Vec<Application> = roots.iter().map(|r| describe_app(evidence, r)).collect();
    tracing::info!(apps = apps.len(), "discovered applications");
    apps
}

/// Infer kind, name and description for the application rooted at `path`.
pub fn describe_app(evidence: &Evidence, path: &str) -> Application {
    let default_name = if path == "." {
        evidence
            .root()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string())
    } else {
        path.to_string()
    };
    let mut app = Application {
        path: path.to_string(),
        kind: AppKind::Unknown,
        name: default_name,
        description: String::new(),
    };

    let has = |f: &str| evidence.is_file(&join(path, f));

    if has("package.json") {
        app.kind = AppKind::Node;
        let manifest = evidence.config(&join(path, "package.json"));
        apply_metadata(
            &mut app,
            string_at(manifest.value(), &["name"]),
            string_at(manifest.value(), &["description"]),
        );
    } else if has("pyproject.toml") || has("requirements.txt") {
        app.kind = AppKind::Python;
        let manifest = evidence.config(&join(path, "pyproject.toml"));
        apply_metadata(
            &mut app,
            string_at(manifest.value(), &["project", "name"]),
            string_at(manifest.value(), &["project", "description"]),
        );
    } else if has("go.mod") {
        app.kind = AppKind::Go;
        let text = evidence.text(&join(path, "go.mod"));
        let module = text.text().and_then(|t| {
            t.raw
                .lines()
                .map(str::trim)
                .find_map(|l| l.strip_prefix("module "))
                .map(|m| m.trim().to_string())
        });
        apply_metadata(&mut app, module, None);
    } else if has("Cargo.toml") {
        app.kind = AppKind::Rust;
        let manifest = evidence.config(&join(path, "Cargo.toml"));
        apply_metadata(
            &mut app,
            string_at(manifest.value(), &["package", "name"]),
            string_at(manifest.value(), &["package", "description"]),
        );
    } else if has("pom.xml") || has("build.gradle") || has("build.gradle.kts") {
        app.kind = AppKind::Java;
    } else if evidence
        .index()
        .files_in(path)
        .any(|f| f.ends_with(".csproj"))
    {
        app.kind = AppKind::Dotnet;
    } else {
        // No manifest: fall back to top-level source files.
        let direct: Vec<&str> = evidence.index().files_in(path).collect();
        if direct.iter().any(|f| f.ends_with(".py")) {
            app.kind = AppKind::Python;
        } else if direct.iter().any(|f| f.ends_with(".go")) {
            app.kind = AppKind::Go;
        } else if direct.iter().any(|f| f.ends_with(".rs")) {
            app.kind = AppKind::Rust;
        }
    }

    app
}

/// Non-empty string found by following `keys` through a parsed manifest.
fn string_at(value: Option<&serde_json::Value>, keys: &[&str]) -> Option<String> {
    let mut cur = value?;
    for k in keys {
        cur = cur.get(*k)?;
    }
    cur.as_str().filter(|s| !s.is_empty()).map(str::to_string)
}

fn apply_metadata(app: &mut Application, name: Option<String>, description: Option<String>) {
    if let Some(name) = name {
        app.name = name;
    }
    if let Some(description) = description {
        app.description = description;
    }
}

/// Distinct languages across applications, in discovery order.
pub fn detect_languages(apps: &[Application]) -> Vec<String> {
    let mut langs: Vec<String> = Vec::new();
    for lang in apps.iter().filter_map(|a| a.kind.language()) {
        if !langs.iter().any(|l| l == lang) {
            langs.push(lang.to_string());
        }
    }
    langs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::ExcludeSet;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    fn discover(root: &Path, config: &RepoConfig) -> Vec<Application> {
        let excludes = ExcludeSet::from_config(config).unwrap();
        let evidence = Evidence::new(root, excludes);
        discover_apps(&evidence, config)
    }

    #[test]
    fn test_discover_monorepo_sorted() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "apps/web/package.json",
            r#"{"name": "web", "description": "Storefront"}"#,
        );
        write(temp.path(), "apps/api/go.mod", "module example.com/api\n\ngo 1.22\n");
        write(temp.path(), "tools/Cargo.toml", "[package]\nname = \"tools\"\n");
        write(temp.path(), "node_modules/dep/package.json", "{}");

        let apps = discover(temp.path(), &RepoConfig::default());
        let paths: Vec<&str> = apps.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(paths, vec!["tools", "apps/api", "apps/web"]);

        assert_eq!(apps[0].kind, AppKind::Rust);
        assert_eq!(apps[1].kind, AppKind::Go);
        assert_eq!(apps[1].name, "example.com/api");
        assert_eq!(apps[2].name, "web");
        assert_eq!(apps[2].description, "Storefront");
    }

    #[test]
    fn test_discovery_respects_depth() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a/b/c/package.json", "{}");
        let config = RepoConfig {
            app_discovery_max_depth: Some(2),
            ..Default::default()
        };
        let apps = discover(temp.path(), &config);
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].path, ".");
    }

    #[test]
    fn test_no_manifest_falls_back_to_root() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "main.py", "print('hi')");
        let apps = discover(temp.path(), &RepoConfig::default());
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].path, ".");
        assert_eq!(apps[0].kind, AppKind::Python);
    }

    #[test]
    fn test_configured_roots_used_verbatim() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "apps/api/package.json", "{}");
        write(temp.path(), "apps/web/package.json", "{}");
        write(temp.path(), "apps/admin/package.json", "{}");
        let config = RepoConfig {
            app_roots: vec!["./apps/web/".to_string(), "apps/api".to_string()],
            ..Default::default()
        };
        let apps = discover(temp.path(), &config);
        let paths: Vec<&str> = apps.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(paths, vec!["apps/api", "apps/web"]);
    }

    #[test]
    fn test_malformed_manifest_keeps_kind() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "svc/package.json", "{ broken");
        let apps = discover(temp.path(), &RepoConfig::default());
        assert_eq!(apps[0].kind, AppKind::Node);
        assert_eq!(apps[0].name, "svc");
    }

    #[test]
    fn test_detect_languages_dedupes() {
        let app = |kind| Application {
            path: ".".into(),
            kind,
            name: "x".into(),
            description: String::new(),
        };
        let langs = detect_languages(&[
            app(AppKind::Go),
            app(AppKind::Unknown),
            app(AppKind::Go),
            app(AppKind::Node),
        ]);
        assert_eq!(langs, vec!["Go", "JavaScript/TypeScript"]);
    }
}
