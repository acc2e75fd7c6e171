//! Filesystem content store.
//!
//! Layout: `<source_dir>/<collection>/<locale>/**/*.md|mdx`. Every markdown
//! file becomes one entry; `index` files collapse onto their directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::ContentEntry;
use crate::front_matter::parse_document;
use crate::store::{ContentStore, StoreError, StoreErrorKind};

const BACKEND: &str = "Fs";

/// Content store reading markdown files from disk.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    source_dir: PathBuf,
}

impl FsContentStore {
    /// Create a store rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    /// Root directory containing the collections.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    fn collection_dir(&self, collection: &str) -> Result<PathBuf, StoreError> {
        let valid = !collection.is_empty()
            && !collection.starts_with('.')
            && !collection.contains(['/', '\\']);
        if !valid {
            return Err(StoreError::new(StoreErrorKind::InvalidCollection)
                .with_backend(BACKEND)
                .with_path(collection));
        }
        Ok(self.source_dir.join(collection))
    }
}

impl ContentStore for FsContentStore {
    fn get_all(&self, collection: &str) -> Result<Vec<ContentEntry>, StoreError> {
        let root = self.collection_dir(collection)?;
        if !root.is_dir() {
            return Err(StoreError::new(StoreErrorKind::NotFound)
                .with_backend(BACKEND)
                .with_path(root));
        }

        let mut files = Vec::new();
        collect_markdown(&root, &mut files);
        files.sort();

        let mut entries = Vec::with_capacity(files.len());
        for path in files {
            let Some(id) = entry_id(&root, &path) else {
                continue;
            };
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                    continue;
                }
            };
            let (data, body) = parse_document(&text).map_err(|e| {
                StoreError::new(StoreErrorKind::InvalidFrontMatter)
                    .with_backend(BACKEND)
                    .with_path(&path)
                    .with_source(e)
            })?;
            entries.push(ContentEntry::new(id, data, body));
        }

        tracing::debug!(
            collection,
            count = entries.len(),
            "Loaded content entries"
        );
        Ok(entries)
    }
}

/// Recursively collect `.md` and `.mdx` files, skipping hidden and
/// underscore-prefixed names.
fn collect_markdown(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "Skipping unreadable directory");
            return;
        }
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            collect_markdown(&path, files);
        } else if is_markdown(&path) {
            files.push(path);
        }
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("mdx"))
}

/// Entry id for a file relative to the collection root.
///
/// Examples:
/// - `en/guides/pages.md` -> `"en/guides/pages"`
/// - `en/Guides/Index.mdx` -> `"en/guides"`
/// - `index.md` -> `None` (no locale segment)
fn entry_id(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?.with_extension("");
    let segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
        .collect();

    let segments = match segments.split_last() {
        Some((last, rest)) if last == "index" => rest,
        _ => &segments[..],
    };
    if segments.is_empty() {
        return None;
    }
    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_entry_id() {
        let root = Path::new("/docs");

        assert_eq!(
            entry_id(root, Path::new("/docs/en/guides/pages.md")).as_deref(),
            Some("en/guides/pages")
        );
        assert_eq!(
            entry_id(root, Path::new("/docs/en/Guides/Index.mdx")).as_deref(),
            Some("en/guides")
        );
        assert_eq!(
            entry_id(root, Path::new("/docs/en/getting-started.mdx")).as_deref(),
            Some("en/getting-started")
        );
        assert_eq!(entry_id(root, Path::new("/docs/index.md")), None);
    }

    #[test]
    fn test_get_all_reads_sorted_entries() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docs/en/guides/pages.md", "---\ntitle: Pages\n---\nBody");
        write(dir.path(), "docs/en/getting-started.mdx", "---\ntitle: Start\n---\n");
        write(dir.path(), "docs/zh/guides/pages.md", "---\ntitle: 页面\n---\n");

        let store = FsContentStore::new(dir.path());
        let entries = store.get_all("docs").unwrap();

        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["en/getting-started", "en/guides/pages", "zh/guides/pages"]
        );
        assert_eq!(entries[1].slug, "en/guides/pages");
        assert_eq!(entries[1].title(), Some("Pages"));
        assert_eq!(entries[1].body, "Body");
    }

    #[test]
    fn test_get_all_skips_hidden_underscore_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docs/en/visible.md", "");
        write(dir.path(), "docs/en/.hidden.md", "");
        write(dir.path(), "docs/en/_draft.md", "");
        write(dir.path(), "docs/en/_partials/part.md", "");
        write(dir.path(), "docs/en/image.png", "");

        let store = FsContentStore::new(dir.path());
        let entries = store.get_all("docs").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "en/visible");
    }

    #[test]
    fn test_get_all_index_collapses() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docs/en/guides/index.md", "---\ntitle: Guides\n---\n");

        let store = FsContentStore::new(dir.path());
        let entries = store.get_all("docs").unwrap();

        assert_eq!(entries[0].id, "en/guides");
    }

    #[test]
    fn test_get_all_missing_collection() {
        let dir = tempfile::tempdir().unwrap();

        let store = FsContentStore::new(dir.path());
        let err = store.get_all("docs").unwrap_err();

        assert_eq!(err.kind, StoreErrorKind::NotFound);
        assert_eq!(err.backend, Some("Fs"));
    }

    #[test]
    fn test_get_all_invalid_collection_name() {
        let store = FsContentStore::new("/tmp");

        for name in ["", "../etc", ".git", "a/b"] {
            let err = store.get_all(name).unwrap_err();
            assert_eq!(err.kind, StoreErrorKind::InvalidCollection, "{name}");
        }
    }

    #[test]
    fn test_get_all_invalid_front_matter_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docs/en/broken.md", "---\ntitle: [oops\n---\n");

        let store = FsContentStore::new(dir.path());
        let err = store.get_all("docs").unwrap_err();

        assert_eq!(err.kind, StoreErrorKind::InvalidFrontMatter);
        assert!(err.path.unwrap().ends_with("en/broken.md"));
    }
}
