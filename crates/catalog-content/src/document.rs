//! Content file definition and parsing
//!
//! Each content file is a markdown document with YAML frontmatter

use catalog_types::{CatalogError, ContentKind, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::frontmatter::{Frontmatter, TypedFrontmatter};

/// A parsed subagent or command file
#[derive(Debug, Clone)]
pub struct ContentFile {
    /// Which directory the file came from
    pub kind: ContentKind,
    /// Path relative to the catalog root, `/`-separated (`subagents/foo.md`)
    pub relative_path: String,
    /// Base name including extension
    pub file_name: String,
    /// Metadata block; empty when the file has none
    pub frontmatter: Frontmatter,
    /// Text after the frontmatter block
    pub body: String,
    /// The whole file as read from disk, byte order mark included
    pub raw: String,
}

impl ContentFile {
    /// Parse file text that has already been read, placing it in the
    /// default directory for its kind
    pub fn parse(kind: ContentKind, file_name: &str, raw: String) -> Result<Self> {
        Self::parse_at(kind, kind.relative_path(file_name), file_name, raw)
    }

    /// Parse file text read from `dir`
    pub fn parse_in(kind: ContentKind, dir: &Path, file_name: &str, raw: String) -> Result<Self> {
        Self::parse_at(kind, kind.relative_path_in(dir, file_name), file_name, raw)
    }

    fn parse_at(
        kind: ContentKind,
        relative_path: String,
        file_name: &str,
        raw: String,
    ) -> Result<Self> {
        let (frontmatter, body) = split_frontmatter(&raw).map_err(|reason| {
            CatalogError::Frontmatter {
                file: relative_path.clone(),
                reason,
            }
        })?;

        Ok(Self {
            kind,
            relative_path,
            file_name: file_name.to_string(),
            frontmatter,
            body,
            raw,
        })
    }

    /// Read and parse a file from disk
    pub fn load(kind: ContentKind, path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match path.parent() {
            Some(dir) => Self::parse_in(kind, dir, &file_name, raw),
            None => Self::parse(kind, &file_name, raw),
        }
    }

    /// File name without the `.md` extension
    pub fn stem(&self) -> &str {
        self.file_name
            .strip_suffix(".md")
            .unwrap_or(&self.file_name)
    }

    /// Typed frontmatter view for this file's kind
    pub fn typed(&self) -> TypedFrontmatter {
        self.frontmatter.typed(self.kind)
    }
}

/// Split file text into its frontmatter mapping and body.
///
/// The block must open on the first line with `---` and close with the next
/// line that is exactly `---`. Text without an opening marker, or with one
/// that is never closed, has empty frontmatter and is all body. One leading
/// byte order mark is ignored.
pub fn split_frontmatter(content: &str) -> std::result::Result<(Frontmatter, String), String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let frontmatter_re = Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n(.*))?\z")
        .map_err(|e| format!("Failed to compile regex: {}", e))?;

    let Some(captures) = frontmatter_re.captures(content) else {
        return Ok((Frontmatter::default(), content.to_string()));
    };

    let yaml_str = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");

    let fields = parse_yaml_mapping(yaml_str)?;
    Ok((Frontmatter::new(fields), body.to_string()))
}

fn parse_yaml_mapping(yaml_str: &str) -> std::result::Result<Map<String, Value>, String> {
    if yaml_str.trim().is_empty() {
        return Ok(Map::new());
    }

    let value: Value = serde_yaml::from_str(yaml_str)
        .map_err(|e| format!("Failed to parse YAML frontmatter: {}", e))?;

    match value {
        Value::Object(fields) => Ok(fields),
        Value::Null => Ok(Map::new()),
        other => Err(format!(
            "Frontmatter must be a mapping of keys to values, found {}",
            json_type_name(&other)
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_file() {
        let content = r#"---
name: code-reviewer
category: quality-security
description: Reviews code for best practices and security.
tools: Read, Grep
---

You are a senior code reviewer.
"#;

        let file =
            ContentFile::parse(ContentKind::Subagent, "code-reviewer.md", content.to_string())
                .unwrap();
        assert_eq!(file.relative_path, "subagents/code-reviewer.md");
        assert_eq!(file.stem(), "code-reviewer");
        assert_eq!(file.frontmatter.text("name").as_deref(), Some("code-reviewer"));
        assert_eq!(
            file.frontmatter.text("tools").as_deref(),
            Some("Read, Grep")
        );
        assert!(file.body.contains("You are a senior code reviewer."));
        assert_eq!(file.raw, content);
    }

    #[test]
    fn test_no_frontmatter_is_all_body() {
        let (fm, body) = split_frontmatter("# Title\n\nJust text.\n").unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, "# Title\n\nJust text.\n");
    }

    #[test]
    fn test_unclosed_frontmatter_is_all_body() {
        let (fm, body) = split_frontmatter("---\nname: x\nno closing marker\n").unwrap();
        assert!(fm.is_empty());
        assert!(body.starts_with("---"));
    }

    #[test]
    fn test_empty_frontmatter_block() {
        let (fm, body) = split_frontmatter("---\n---\nBody here").unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, "Body here");
    }

    #[test]
    fn test_crlf_frontmatter() {
        let (fm, body) =
            split_frontmatter("---\r\ndescription: hi\r\ncategory: data-ai\r\n---\r\nText").unwrap();
        assert_eq!(fm.text("description").as_deref(), Some("hi"));
        assert_eq!(body, "Text");
    }

    #[test]
    fn test_dashes_inside_a_value_do_not_close_the_block() {
        let (fm, body) =
            split_frontmatter("---\ndescription: before---\nname: a\n---\nBody").unwrap();
        assert_eq!(fm.text("description").as_deref(), Some("before---"));
        assert_eq!(fm.text("name").as_deref(), Some("a"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_frontmatter_ending_at_eof() {
        let (fm, body) = split_frontmatter("---\nname: a\n---").unwrap();
        assert_eq!(fm.text("name").as_deref(), Some("a"));
        assert!(body.is_empty());
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let raw = "\u{feff}---\nname: rust-pro\ncategory: language-specialists\n---\nYou are\n";
        let file =
            ContentFile::parse(ContentKind::Subagent, "rust-pro.md", raw.to_string()).unwrap();
        assert_eq!(file.frontmatter.text("name").as_deref(), Some("rust-pro"));
        assert_eq!(
            file.frontmatter.text("category").as_deref(),
            Some("language-specialists")
        );
        assert_eq!(file.body, "You are\n");
        assert_eq!(file.raw, raw);
    }

    #[test]
    fn test_parse_in_uses_directory_name() {
        let file = ContentFile::parse_in(
            ContentKind::Subagent,
            Path::new("/srv/catalog/agents"),
            "rust-pro.md",
            "---\nname: rust-pro\n---\n".to_string(),
        )
        .unwrap();
        assert_eq!(file.relative_path, "agents/rust-pro.md");
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let err = ContentFile::parse(
            ContentKind::Command,
            "broken.md",
            "---\nname: [unclosed\n---\nBody".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Frontmatter { ref file, .. } if file == "commands/broken.md"));
    }

    #[test]
    fn test_scalar_frontmatter_is_an_error() {
        let err = split_frontmatter("---\njust a string\n---\nBody").unwrap_err();
        assert!(err.contains("a string"));
    }
}
