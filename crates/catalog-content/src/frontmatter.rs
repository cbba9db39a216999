//! Frontmatter mapping and its typed views
//!
//! The raw mapping is kept as JSON so it can be handed to a JSON Schema
//! validator unchanged. The typed views read it leniently: wrong types are
//! the schema's business, not the reader's.

use catalog_types::ContentKind;
use serde_json::{Map, Value};

/// Key/value metadata from the top of a content file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: Map<String, Value>,
}

impl Frontmatter {
    /// Wrap an already-parsed mapping
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// True when the block was missing or had no keys
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// True when the key is present with a value JavaScript would call truthy
    pub fn is_set(&self, key: &str) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64() != Some(0.0),
            Some(_) => true,
        }
    }

    /// Scalar value as text. Empty strings, lists and maps read as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// A list field. A bare scalar counts as a one-item list.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.fields.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            Some(value) => scalar_text(value).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// The `tools` field as trimmed names. Accepts the canonical
    /// comma-separated string as well as a YAML list.
    pub fn tools(&self) -> Option<Vec<String>> {
        let raw = match self.fields.get("tools")? {
            Value::String(s) => vec![s.clone()],
            Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
            Value::Null => return None,
            other => scalar_text(other).into_iter().collect(),
        };

        Some(
            raw.iter()
                .flat_map(|entry| entry.split(','))
                .map(str::trim)
                .filter(|tool| !tool.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// The mapping as a JSON object, for schema validation
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Typed view selected by the directory the file came from
    pub fn typed(&self, kind: ContentKind) -> TypedFrontmatter {
        match kind {
            ContentKind::Subagent => TypedFrontmatter::Subagent(SubagentFrontmatter {
                name: self.text("name"),
                category: self.text("category"),
                description: self.text("description"),
                tools: self.tools().unwrap_or_default(),
                tags: self.list("tags"),
            }),
            ContentKind::Command => TypedFrontmatter::Command(CommandFrontmatter {
                name: self.text("name"),
                category: self.text("category"),
                description: self.text("description"),
                prefix: self.text("prefix"),
                argument_hint: self.text("argument-hint"),
                tags: self.list("tags"),
            }),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Frontmatter of a file under `subagents/`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubagentFrontmatter {
    /// Agent name, expected to match the file name
    pub name: Option<String>,
    /// One of the subagent categories
    pub category: Option<String>,
    /// What the agent does and when to use it
    pub description: Option<String>,
    /// Tool names the agent may use
    pub tools: Vec<String>,
    /// Free-form tags
    pub tags: Vec<String>,
}

/// Frontmatter of a file under `commands/`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandFrontmatter {
    /// Command name; the file name is used when absent
    pub name: Option<String>,
    /// One of the command categories
    pub category: Option<String>,
    /// What the command does
    pub description: Option<String>,
    /// Invocation prefix
    pub prefix: Option<String>,
    /// Hint shown for `$ARGUMENTS`
    pub argument_hint: Option<String>,
    /// Free-form tags
    pub tags: Vec<String>,
}

/// Frontmatter dispatched on content kind
#[derive(Debug, Clone, PartialEq)]
pub enum TypedFrontmatter {
    /// From `subagents/`
    Subagent(SubagentFrontmatter),
    /// From `commands/`
    Command(CommandFrontmatter),
}

impl TypedFrontmatter {
    /// Content kind of the view
    pub fn kind(&self) -> ContentKind {
        match self {
            TypedFrontmatter::Subagent(_) => ContentKind::Subagent,
            TypedFrontmatter::Command(_) => ContentKind::Command,
        }
    }

    /// The `name` field
    pub fn name(&self) -> Option<&str> {
        match self {
            TypedFrontmatter::Subagent(fm) => fm.name.as_deref(),
            TypedFrontmatter::Command(fm) => fm.name.as_deref(),
        }
    }

    /// The `description` field
    pub fn description(&self) -> Option<&str> {
        match self {
            TypedFrontmatter::Subagent(fm) => fm.description.as_deref(),
            TypedFrontmatter::Command(fm) => fm.description.as_deref(),
        }
    }
}
