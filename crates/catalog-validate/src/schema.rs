//! # Frontmatter Schemas
//!
//! Compiles the subagent and command JSON Schemas and turns validation
//! failures into flat [`SchemaViolation`] records carrying the instance path,
//! the schema path and the validator's message.
//!
//! Both schemas ship with the crate. A deployment may point at its own
//! schema files instead; those are read once at startup.

use std::fs;
use std::path::Path;

use catalog_types::{CatalogError, ContentKind, Result};
use jsonschema::error::ValidationErrorKind;
use jsonschema::Validator;
use serde_json::{json, Value};
use tracing::debug;

const SUBAGENT_SCHEMA: &str = include_str!("../schemas/subagent-schema.json");
const COMMAND_SCHEMA: &str = include_str!("../schemas/command-schema.json");

/// A single schema violation with structured context.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaViolation {
    /// JSON Pointer to the violating value; empty for the root object.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that failed.
    pub schema_path: String,
    /// Validator message.
    pub message: String,
    /// Set when a `required` keyword failed: the absent property.
    pub missing_property: Option<String>,
}

impl SchemaViolation {
    /// Name of the offending field, if the violation is below the root.
    pub fn field(&self) -> Option<&str> {
        self.instance_path
            .strip_prefix('/')
            .filter(|field| !field.is_empty())
    }

    /// True when the violation concerns `property`, either as a value or as a
    /// missing required property.
    pub fn concerns(&self, property: &str) -> bool {
        self.field().map(|f| f.split('/').next() == Some(property)).unwrap_or(false)
            || self.missing_property.as_deref() == Some(property)
            || self.schema_path.contains(&format!("/{}/", property))
    }

    /// Raw violation for the JSON report
    pub fn details(&self) -> Value {
        json!({
            "instancePath": self.instance_path,
            "schemaPath": self.schema_path,
            "message": self.message,
        })
    }
}

/// A compiled frontmatter schema
pub struct FrontmatterSchema {
    name: String,
    validator: Validator,
}

impl FrontmatterSchema {
    /// The schema bundled with this crate for `kind`
    pub fn builtin(kind: ContentKind) -> Result<Self> {
        let (name, source) = match kind {
            ContentKind::Subagent => ("subagent-schema.json", SUBAGENT_SCHEMA),
            ContentKind::Command => ("command-schema.json", COMMAND_SCHEMA),
        };
        let value: Value = serde_json::from_str(source).map_err(|e| CatalogError::Schema {
            schema: name.to_string(),
            reason: format!("invalid JSON: {}", e),
        })?;
        Self::from_value(name, &value)
    }

    /// Load and compile a schema file
    pub fn from_file(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Schema {
            schema: name.clone(),
            reason: format!("cannot read file: {}", e),
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|e| CatalogError::Schema {
            schema: name.clone(),
            reason: format!("invalid JSON: {}", e),
        })?;
        Self::from_value(&name, &value)
    }

    /// Compile an already-parsed schema document
    pub fn from_value(name: &str, schema: &Value) -> Result<Self> {
        let validator = jsonschema::validator_for(schema).map_err(|e| CatalogError::Schema {
            schema: name.to_string(),
            reason: e.to_string(),
        })?;
        debug!("Compiled schema {}", name);

        Ok(Self {
            name: name.to_string(),
            validator,
        })
    }

    /// Schema name or path, for messages
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every violation of `instance`, in validator order
    pub fn validate(&self, instance: &Value) -> Vec<SchemaViolation> {
        self.validator
            .iter_errors(instance)
            .map(|e| {
                let missing_property = match &e.kind {
                    ValidationErrorKind::Required { property } => {
                        property.as_str().map(String::from)
                    }
                    _ => None,
                };
                SchemaViolation {
                    instance_path: e.instance_path.to_string(),
                    schema_path: e.schema_path.to_string(),
                    message: e.to_string(),
                    missing_property,
                }
            })
            .collect()
    }
}

/// The pair of schemas, selected by content kind
pub struct SchemaSet {
    subagent: FrontmatterSchema,
    command: FrontmatterSchema,
}

impl SchemaSet {
    /// Both bundled schemas
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            subagent: FrontmatterSchema::builtin(ContentKind::Subagent)?,
            command: FrontmatterSchema::builtin(ContentKind::Command)?,
        })
    }

    /// Bundled schemas unless an override path is given
    pub fn load(subagent: Option<&Path>, command: Option<&Path>) -> Result<Self> {
        Ok(Self {
            subagent: match subagent {
                Some(path) => FrontmatterSchema::from_file(path)?,
                None => FrontmatterSchema::builtin(ContentKind::Subagent)?,
            },
            command: match command {
                Some(path) => FrontmatterSchema::from_file(path)?,
                None => FrontmatterSchema::builtin(ContentKind::Command)?,
            },
        })
    }

    /// Schema that applies to files of `kind`
    pub fn for_kind(&self, kind: ContentKind) -> &FrontmatterSchema {
        match kind {
            ContentKind::Subagent => &self.subagent,
            ContentKind::Command => &self.command,
        }
    }
}
