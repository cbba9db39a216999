//! Registry generation

use catalog_content::{ContentFile, DiscoveryFilter};
use catalog_types::{CatalogError, ContentKind, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::model::{CommandEntry, Registry, RegistryEntry, SubagentEntry};

/// Scans the two content directories and assembles a [`Registry`]
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    subagents_dir: PathBuf,
    commands_dir: PathBuf,
}

impl RegistryBuilder {
    /// Create a builder over the given content directories
    pub fn new(subagents_dir: impl Into<PathBuf>, commands_dir: impl Into<PathBuf>) -> Self {
        Self {
            subagents_dir: subagents_dir.into(),
            commands_dir: commands_dir.into(),
        }
    }

    /// Scan both directories concurrently and build the registry.
    ///
    /// Fails on the first unreadable directory, unreadable file or bad
    /// frontmatter; no partial registry is returned.
    pub async fn build(&self, generated_at: DateTime<Utc>) -> Result<Registry> {
        info!(
            "Scanning {:?} and {:?}",
            self.subagents_dir, self.commands_dir
        );

        let (subagent_entries, command_entries) = tokio::try_join!(
            scan_directory(&self.subagents_dir, ContentKind::Subagent),
            scan_directory(&self.commands_dir, ContentKind::Command),
        )?;

        let mut subagents: Vec<SubagentEntry> = Vec::new();
        let mut commands: Vec<CommandEntry> = Vec::new();
        for entry in subagent_entries.into_iter().chain(command_entries) {
            match entry {
                RegistryEntry::Subagent(entry) => subagents.push(entry),
                RegistryEntry::Command(entry) => commands.push(entry),
            }
        }

        info!(
            "Collected {} subagents and {} commands",
            subagents.len(),
            commands.len()
        );
        Ok(Registry::new(subagents, commands, generated_at))
    }
}

/// Read every markdown file in one content directory
async fn scan_directory(dir: &Path, kind: ContentKind) -> Result<Vec<RegistryEntry>> {
    let read_dir_error = |source: std::io::Error| CatalogError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_dir_error)?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_dir_error)? {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !DiscoveryFilter::AllMarkdown.accepts(&file_name) {
            continue;
        }
        if entry.file_type().await.map_err(read_dir_error)?.is_dir() {
            continue;
        }
        files.push((file_name, entry.path()));
    }

    // Directory order is platform dependent
    files.sort();

    let mut parsed = Vec::with_capacity(files.len());
    for (file_name, path) in files {
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| CatalogError::ReadFile {
                path: path.clone(),
                source,
            })?;
        let file = ContentFile::parse_in(kind, dir, &file_name, raw)?;
        debug!("Indexed {}", file.relative_path);
        parsed.push(RegistryEntry::from_file(&file));
    }

    Ok(parsed)
}

/// Serialize and write the registry, creating the parent directory.
///
/// The document goes to a temporary sibling first and is renamed into
/// place, so a failed write never leaves a truncated registry behind.
pub async fn write_registry(registry: &Registry, output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(registry)?;

    let write_error = |source: std::io::Error| CatalogError::WriteFile {
        path: output.to_path_buf(),
        source,
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }

    let mut staging = output.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    tokio::fs::write(&staging, json).await.map_err(write_error)?;
    tokio::fs::rename(&staging, output).await.map_err(write_error)?;

    info!("Wrote registry to {:?}", output);
    Ok(())
}
