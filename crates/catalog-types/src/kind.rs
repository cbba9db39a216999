use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Valid `category` values for subagent files
pub const SUBAGENT_CATEGORIES: &[&str] = &[
    "development-architecture",
    "language-specialists",
    "infrastructure-operations",
    "quality-security",
    "data-ai",
    "specialized-domains",
    "crypto-trading",
];

/// Valid `category` values for command files
pub const COMMAND_CATEGORIES: &[&str] = &[
    "ci-deployment",
    "code-analysis-testing",
    "context-loading-priming",
    "documentation-changelogs",
    "project-task-management",
    "version-control-git",
    "miscellaneous",
];

/// Tool names an agent host understands
pub const KNOWN_TOOLS: &[&str] = &[
    "Read",
    "Write",
    "Edit",
    "MultiEdit",
    "Bash",
    "WebSearch",
    "WebFetch",
    "Task",
    "TodoWrite",
    "Grep",
    "Glob",
    "LS",
    "NotebookRead",
    "NotebookEdit",
];

/// The two kinds of catalog content, keyed by the directory they live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Subagent,
    Command,
}

impl ContentKind {
    /// Both kinds, subagents first
    pub const ALL: [ContentKind; 2] = [ContentKind::Subagent, ContentKind::Command];

    /// Directory name used in relative paths (`subagents/foo.md`)
    pub fn dir_name(self) -> &'static str {
        match self {
            ContentKind::Subagent => "subagents",
            ContentKind::Command => "commands",
        }
    }

    /// Closed category vocabulary for this kind
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            ContentKind::Subagent => SUBAGENT_CATEGORIES,
            ContentKind::Command => COMMAND_CATEGORIES,
        }
    }

    /// Relative path of a file in the default directory, `/`-separated
    pub fn relative_path(self, file_name: &str) -> String {
        format!("{}/{}", self.dir_name(), file_name)
    }

    /// Relative path of a file in `dir`, prefixed with the directory's own
    /// name. Falls back to [`dir_name`](Self::dir_name) when `dir` has no
    /// final component (`.`, `/`).
    pub fn relative_path_in(self, dir: &Path, file_name: &str) -> String {
        let label = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(self.dir_name());
        format!("{}/{}", label, file_name)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Subagent => write!(f, "subagent"),
            ContentKind::Command => write!(f, "command"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_uses_dir_name() {
        assert_eq!(
            ContentKind::Command.relative_path("deploy.md"),
            "commands/deploy.md"
        );
    }

    #[test]
    fn test_relative_path_in_follows_configured_dir() {
        assert_eq!(
            ContentKind::Subagent.relative_path_in(Path::new("/srv/catalog/agents"), "rust-pro.md"),
            "agents/rust-pro.md"
        );
        assert_eq!(
            ContentKind::Command.relative_path_in(Path::new("/srv/catalog/commands/"), "deploy.md"),
            "commands/deploy.md"
        );
        assert_eq!(
            ContentKind::Command.relative_path_in(Path::new("."), "deploy.md"),
            "commands/deploy.md"
        );
    }

    #[test]
    fn test_category_vocabularies_are_disjoint() {
        for category in SUBAGENT_CATEGORIES {
            assert!(!COMMAND_CATEGORIES.contains(category));
        }
    }
}
