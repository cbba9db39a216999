//! Registry document shape

use catalog_content::{ContentFile, TypedFrontmatter};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::cmp::Ordering;

/// `$schema` reference stamped on every registry
pub const REGISTRY_SCHEMA_URL: &str = "https://buildwithclaude.com/schema/registry.json";
/// Version stamped on the registry and on every entry
pub const ENTRY_VERSION: &str = "1.0.0";

const DEFAULT_CATEGORY: &str = "uncategorized";
const DEFAULT_PREFIX: &str = "/";

/// The aggregated index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registry {
    /// Schema reference
    #[serde(rename = "$schema")]
    pub schema: String,
    /// Registry format version
    pub version: String,
    /// Generation time, RFC 3339 UTC with milliseconds
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    /// Subagents sorted by name
    pub subagents: Vec<SubagentEntry>,
    /// Commands sorted by name
    pub commands: Vec<CommandEntry>,
}

impl Registry {
    /// Assemble a registry from unsorted entries
    pub fn new(
        mut subagents: Vec<SubagentEntry>,
        mut commands: Vec<CommandEntry>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        subagents.sort_by(|a, b| by_name(&a.name, &a.file, &b.name, &b.file));
        commands.sort_by(|a, b| by_name(&a.name, &a.file, &b.name, &b.file));

        Self {
            schema: REGISTRY_SCHEMA_URL.to_string(),
            version: ENTRY_VERSION.to_string(),
            last_updated: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            subagents,
            commands,
        }
    }
}

fn by_name(a_name: &str, a_file: &str, b_name: &str, b_file: &str) -> Ordering {
    a_name
        .to_lowercase()
        .cmp(&b_name.to_lowercase())
        .then_with(|| a_name.cmp(b_name))
        .then_with(|| a_file.cmp(b_file))
}

/// Registry projection of a subagent file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubagentEntry {
    /// Name from frontmatter, or the file stem
    pub name: String,
    /// Category, `uncategorized` when absent
    pub category: String,
    /// Description, empty when absent
    pub description: String,
    /// Fixed entry version
    pub version: String,
    /// Path relative to the catalog root
    pub file: String,
    /// Tool names
    pub tools: Vec<String>,
    /// Free-form tags
    pub tags: Vec<String>,
}

/// Registry projection of a command file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandEntry {
    /// Name from frontmatter, or the file stem
    pub name: String,
    /// Category, `uncategorized` when absent
    pub category: String,
    /// Description, empty when absent
    pub description: String,
    /// Fixed entry version
    pub version: String,
    /// Path relative to the catalog root
    pub file: String,
    /// Invocation prefix, `/` when absent
    pub prefix: String,
    /// Free-form tags
    pub tags: Vec<String>,
}

/// Either kind of entry, as produced by a directory scan
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEntry {
    /// From `subagents/`
    Subagent(SubagentEntry),
    /// From `commands/`
    Command(CommandEntry),
}

impl RegistryEntry {
    /// Project a parsed file, filling defaults for absent fields
    pub fn from_file(file: &ContentFile) -> Self {
        let fallback_name = file.stem().to_string();
        let path = file.relative_path.clone();

        match file.typed() {
            TypedFrontmatter::Subagent(fm) => RegistryEntry::Subagent(SubagentEntry {
                name: fm.name.unwrap_or(fallback_name),
                category: fm.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                description: fm.description.unwrap_or_default(),
                version: ENTRY_VERSION.to_string(),
                file: path,
                tools: fm.tools,
                tags: fm.tags,
            }),
            TypedFrontmatter::Command(fm) => RegistryEntry::Command(CommandEntry {
                name: fm.name.unwrap_or(fallback_name),
                category: fm.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                description: fm.description.unwrap_or_default(),
                version: ENTRY_VERSION.to_string(),
                file: path,
                prefix: fm.prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
                tags: fm.tags,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use catalog_types::ContentKind;
    use chrono::TimeZone;

    fn parse(kind: ContentKind, name: &str, raw: &str) -> ContentFile {
        ContentFile::parse(kind, name, raw.to_string()).unwrap()
    }

    #[test]
    fn test_subagent_defaults() {
        let file = parse(ContentKind::Subagent, "bare.md", "No frontmatter at all");
        let RegistryEntry::Subagent(entry) = RegistryEntry::from_file(&file) else {
            panic!("expected subagent entry");
        };
        assert_eq!(entry.name, "bare");
        assert_eq!(entry.category, "uncategorized");
        assert_eq!(entry.description, "");
        assert_eq!(entry.version, "1.0.0");
        assert_eq!(entry.file, "subagents/bare.md");
        assert!(entry.tools.is_empty());
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_command_defaults_prefix() {
        let file = parse(
            ContentKind::Command,
            "deploy.md",
            "---\ndescription: Deploy\ncategory: ci-deployment\n---\nRun it",
        );
        let RegistryEntry::Command(entry) = RegistryEntry::from_file(&file) else {
            panic!("expected command entry");
        };
        assert_eq!(entry.name, "deploy");
        assert_eq!(entry.prefix, "/");
        assert_eq!(entry.category, "ci-deployment");
    }

    #[test]
    fn test_subagent_tools_are_split() {
        let file = parse(
            ContentKind::Subagent,
            "rust-pro.md",
            "---\nname: rust-pro\ntools: Read, Write, Bash\ntags: [rust, systems]\n---\nYou are",
        );
        let RegistryEntry::Subagent(entry) = RegistryEntry::from_file(&file) else {
            panic!("expected subagent entry");
        };
        assert_eq!(entry.tools, vec!["Read", "Write", "Bash"]);
        assert_eq!(entry.tags, vec!["rust", "systems"]);
    }

    #[test]
    fn test_registry_sorts_and_stamps() {
        let entry = |name: &str| CommandEntry {
            name: name.to_string(),
            category: "miscellaneous".to_string(),
            description: String::new(),
            version: ENTRY_VERSION.to_string(),
            file: format!("commands/{}.md", name),
            prefix: "/".to_string(),
            tags: Vec::new(),
        };
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let registry = Registry::new(
            Vec::new(),
            vec![entry("zeta"), entry("Beta"), entry("alpha")],
            at,
        );

        let names: Vec<_> = registry.commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Beta", "zeta"]);
        assert_eq!(registry.last_updated, "2026-01-02T03:04:05.000Z");

        let json = serde_json::to_value(&registry).unwrap();
        assert_eq!(json["$schema"], REGISTRY_SCHEMA_URL);
        assert_eq!(json["version"], "1.0.0");
        assert!(json.get("lastUpdated").is_some());
    }
}
