//! One-pass listing of every non-excluded file and directory in a repo.

use std::collections::BTreeSet;
use std::path::Path;

use walkdir::WalkDir;

use super::exclude::ExcludeSet;

/// Sorted, repository-relative listing of the tree. Paths use `/` as the
/// separator regardless of platform; the root itself is `"."` and is not
/// stored.
#[derive(Debug, Default, Clone)]
pub struct RepoIndex {
    pub files: BTreeSet<String>,
    pub dirs: BTreeSet<String>,
    /// Entries the walk could not read, as diagnostic notes.
    pub walk_errors: Vec<String>,
}

impl RepoIndex {
    /// Walk `root`, pruning excluded directories and skipping excluded files.
    pub fn build(root: &Path, excludes: &ExcludeSet) -> Self {
        let mut index = RepoIndex::default();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                match relative(root, entry.path()) {
                    Some(rel) => !excludes.excludes_dir(&name, &rel),
                    None => false,
                }
            });

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    index.walk_errors.push(err.to_string());
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            let Some(rel) = relative(root, entry.path()) else {
                continue;
            };
            if entry.file_type().is_dir() {
                index.dirs.insert(rel);
            } else if !excludes.excludes_file(&rel) {
                index.files.insert(rel);
            }
        }

        tracing::debug!(
            files = index.files.len(),
            dirs = index.dirs.len(),
            "indexed repository"
        );
        index
    }

    pub fn has_file(&self, rel: &str) -> bool {
        self.files.contains(rel)
    }

    pub fn has_dir(&self, rel: &str) -> bool {
        rel == "." || self.dirs.contains(rel)
    }

    /// Files at any depth beneath `dir` (`"."` means the whole repository).
    pub fn files_under<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let prefix = if dir == "." {
            String::new()
        } else {
            format!("{}/", dir)
        };
        self.files
            .range(prefix.clone()..)
            .take_while(move |f| f.starts_with(&prefix))
            .map(|f| f.as_str())
    }

    /// Files directly inside `dir`.
    pub fn files_in<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.files_under(dir)
            .filter(move |f| parent_of(f) == dir)
    }
}

/// Repository-relative path of `path`, `/`-separated.
pub fn relative(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        Some(".".to_string())
    } else {
        Some(parts.join("/"))
    }
}

/// Parent directory of a relative path, `"."` for top-level entries.
pub fn parent_of(rel: &str) -> &str {
    match rel.rfind('/') {
        Some(idx) => &rel[..idx],
        None => ".",
    }
}

/// Number of path components; the root is depth 0.
pub fn depth_of(rel: &str) -> usize {
    if rel == "." || rel.is_empty() {
        0
    } else {
        rel.matches('/').count() + 1
    }
}

/// Join a relative directory and a relative path.
pub fn join(dir: &str, rel: &str) -> String {
    if dir == "." || dir.is_empty() {
        rel.to_string()
    } else {
        format!("{}/{}", dir, rel)
    }
}
