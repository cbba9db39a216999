//! Content directory discovery
//!
//! Lists the markdown files of one content directory. Discovery is flat
//! (no recursion) and sorted by file name so every run sees the same order.

use catalog_types::{CatalogError, ContentKind, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Index files that live beside the content but describe it
const INDEX_FILES: &[&str] = &["README.md", "INDEX.md"];

/// Which markdown files a scan should keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryFilter {
    /// Every `.md` file
    AllMarkdown,
    /// `.md` files except `README.md` and `INDEX.md`
    SkipIndexFiles,
}

impl DiscoveryFilter {
    /// Whether a file name passes this filter
    pub fn accepts(self, file_name: &str) -> bool {
        if !file_name.ends_with(".md") {
            return false;
        }
        match self {
            DiscoveryFilter::AllMarkdown => true,
            DiscoveryFilter::SkipIndexFiles => !INDEX_FILES.contains(&file_name),
        }
    }
}

/// A markdown file found in a content directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Kind implied by the directory that was scanned
    pub kind: ContentKind,
    /// Base name including extension
    pub file_name: String,
    /// Location on disk
    pub path: PathBuf,
}

impl DiscoveredFile {
    /// Path labelled by the scanned directory's name (`commands/deploy.md`)
    pub fn relative_path(&self) -> String {
        match self.path.parent() {
            Some(dir) => self.kind.relative_path_in(dir, &self.file_name),
            None => self.kind.relative_path(&self.file_name),
        }
    }
}

/// Scan a single content directory
pub fn discover(dir: &Path, kind: ContentKind, filter: DiscoveryFilter) -> Result<Vec<DiscoveredFile>> {
    let entries = std::fs::read_dir(dir).map_err(|source| CatalogError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| CatalogError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!("Skipping non UTF-8 file name in {:?}", dir);
            continue;
        };

        if !filter.accepts(file_name) {
            debug!("Skipping {:?}", path);
            continue;
        }

        files.push(DiscoveredFile {
            kind,
            file_name: file_name.to_string(),
            path: path.clone(),
        });
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    debug!("Discovered {} {} files in {:?}", files.len(), kind, dir);
    Ok(files)
}
