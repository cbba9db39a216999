//! Whole-catalog validation
//!
//! Validates every subagent and command file against the schema for its
//! directory, then applies the cross-file and content checks. Findings are
//! collected into a [`CatalogValidation`] value returned to the caller; a
//! file that cannot be read or parsed becomes one error and the pass moves
//! on to the next file.

use std::collections::HashMap;
use std::path::PathBuf;

use catalog_content::{discover, ContentFile, DiscoveredFile, DiscoveryFilter};
use catalog_types::{ContentKind, Result, ValidationIssue, KNOWN_TOOLS};
use tracing::{debug, info};

use crate::rules::{overlong_description, unknown_tools, ContentRules, MAX_DESCRIPTION_CHARS};
use crate::schema::{SchemaSet, SchemaViolation};

/// Findings of one validation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogValidation {
    /// Number of files examined
    pub total_files: usize,
    /// Errors and warnings in discovery order
    pub issues: Vec<ValidationIssue>,
}

impl CatalogValidation {
    /// Blocking issues
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.is_error())
    }

    /// Advisory issues
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| !i.is_error())
    }

    /// True if any issue is blocking
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }
}

/// Progress of a validation pass, reported as it happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationEvent<'a> {
    /// Discovery finished; `total` files will be checked
    Started {
        /// Number of files found
        total: usize,
    },
    /// About to check one file
    Checking {
        /// Relative path of the file
        file: &'a str,
    },
}

/// Subagent names mapped to every file that declares them
#[derive(Debug, Default)]
struct NameIndex {
    paths_by_name: HashMap<String, Vec<String>>,
}

impl NameIndex {
    fn build<'a>(files: impl Iterator<Item = &'a ContentFile>) -> Self {
        let mut paths_by_name: HashMap<String, Vec<String>> = HashMap::new();
        for file in files.filter(|f| f.kind == ContentKind::Subagent) {
            if let Some(name) = file.frontmatter.text("name") {
                paths_by_name
                    .entry(name)
                    .or_default()
                    .push(file.relative_path.clone());
            }
        }
        Self { paths_by_name }
    }

    /// Other files declaring `name`, in discovery order
    fn others(&self, name: &str, path: &str) -> Vec<&str> {
        self.paths_by_name
            .get(name)
            .map(|paths| {
                paths
                    .iter()
                    .map(String::as_str)
                    .filter(|p| *p != path)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Validates the subagent and command directories together
pub struct CatalogValidator {
    schemas: SchemaSet,
    rules: ContentRules,
    subagents_dir: PathBuf,
    commands_dir: PathBuf,
}

impl CatalogValidator {
    /// Create a validator over the two content directories
    pub fn new(
        schemas: SchemaSet,
        subagents_dir: impl Into<PathBuf>,
        commands_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        Ok(Self {
            schemas,
            rules: ContentRules::new()?,
            subagents_dir: subagents_dir.into(),
            commands_dir: commands_dir.into(),
        })
    }

    /// Discover, load and validate every content file.
    ///
    /// Only an unreadable content directory is an `Err`.
    pub fn validate(&self) -> Result<CatalogValidation> {
        self.validate_with(|_| {})
    }

    /// Like [`validate`](Self::validate), calling `on_event` once discovery
    /// is done and again before each file is checked
    pub fn validate_with(
        &self,
        on_event: impl FnMut(ValidationEvent<'_>),
    ) -> Result<CatalogValidation> {
        let mut found: Vec<DiscoveredFile> =
            discover(&self.subagents_dir, ContentKind::Subagent, DiscoveryFilter::SkipIndexFiles)?;
        found.extend(discover(
            &self.commands_dir,
            ContentKind::Command,
            DiscoveryFilter::SkipIndexFiles,
        )?);
        info!("Validating {} files", found.len());

        let loaded: Vec<(String, Result<ContentFile>)> = found
            .iter()
            .map(|f| (f.relative_path(), ContentFile::load(f.kind, &f.path)))
            .collect();

        Ok(self.check_loaded(loaded, on_event))
    }

    /// Validate files that have already been read.
    ///
    /// Each entry pairs a relative path with the load result for it.
    pub fn validate_loaded(&self, loaded: Vec<(String, Result<ContentFile>)>) -> CatalogValidation {
        self.check_loaded(loaded, |_| {})
    }

    fn check_loaded(
        &self,
        loaded: Vec<(String, Result<ContentFile>)>,
        mut on_event: impl FnMut(ValidationEvent<'_>),
    ) -> CatalogValidation {
        on_event(ValidationEvent::Started {
            total: loaded.len(),
        });

        let names = NameIndex::build(loaded.iter().filter_map(|(_, f)| f.as_ref().ok()));
        let mut validation = CatalogValidation {
            total_files: loaded.len(),
            issues: Vec::new(),
        };

        for (path, result) in &loaded {
            debug!("Checking {}", path);
            on_event(ValidationEvent::Checking { file: path });
            match result {
                Ok(file) => self.check_file(file, &names, &mut validation.issues),
                Err(e) => validation.issues.push(ValidationIssue::error(
                    path.clone(),
                    format!("Failed to parse file: {}", e),
                )),
            }
        }

        info!(
            "Validation finished: {} errors, {} warnings",
            validation.errors().count(),
            validation.warnings().count()
        );
        validation
    }

    fn check_file(&self, file: &ContentFile, names: &NameIndex, issues: &mut Vec<ValidationIssue>) {
        let path = file.relative_path.as_str();

        if file.frontmatter.is_empty() {
            issues.push(ValidationIssue::error(path, "No frontmatter found"));
            return;
        }

        let violations = self
            .schemas
            .for_kind(file.kind)
            .validate(&file.frontmatter.to_value());
        for violation in &violations {
            issues.push(
                ValidationIssue::error(path, schema_message(file.kind, violation))
                    .with_details(violation.details()),
            );
        }

        let typed = file.typed();
        let is_subagent = file.kind == ContentKind::Subagent;

        if is_subagent {
            if let Some(name) = typed.name() {
                let expected = format!("{}.md", name);
                if file.file_name != expected {
                    issues.push(ValidationIssue::error(
                        path,
                        format!(
                            "File name '{}' doesn't match name field '{}'. Expected '{}'",
                            file.file_name, name, expected
                        ),
                    ));
                }
            }
        }

        if let Some(chars) = typed.description().and_then(overlong_description) {
            issues.push(ValidationIssue::warning(
                path,
                format!(
                    "Description is {} characters (recommended: under {})",
                    chars, MAX_DESCRIPTION_CHARS
                ),
            ));
        }

        if is_subagent && !file.body.to_lowercase().contains("you are") {
            issues.push(ValidationIssue::warning(
                path,
                "Missing opening statement \"You are a...\"",
            ));
        }

        if is_subagent {
            if let Some(name) = typed.name() {
                let others = names.others(name, path);
                if !others.is_empty() {
                    issues.push(ValidationIssue::error(
                        path,
                        format!("Duplicate name '{}' found in: {}", name, others.join(", ")),
                    ));
                }
            }
        }

        if let Some(tools) = file.frontmatter.tools() {
            for tool in unknown_tools(&tools) {
                issues.push(ValidationIssue::warning(
                    path,
                    format!(
                        "Unknown tool '{}'. Valid tools: {}",
                        tool,
                        KNOWN_TOOLS.join(", ")
                    ),
                ));
            }
        }

        if self.rules.lacks_fence_language(&file.raw) {
            issues.push(ValidationIssue::warning(
                path,
                "Code blocks should specify a language after the backticks",
            ));
        }
    }
}

/// Report text for a schema violation, naming the category vocabulary when
/// the category is missing or wrong
fn schema_message(kind: ContentKind, violation: &SchemaViolation) -> String {
    let valid = || {
        format!(
            "Valid categories for {}s: {}",
            kind,
            kind.categories().join(", ")
        )
    };

    if violation.missing_property.as_deref() == Some("category") {
        return format!("Missing required field 'category'. {}", valid());
    }
    if violation.concerns("category") {
        return format!("Category {}. {}", violation.message, valid());
    }
    if violation.concerns("description") {
        return format!("Description {}", violation.message);
    }
    match violation.field() {
        Some(field) => format!("Field '{}' {}", field, violation.message),
        None => violation.message.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn violation(instance_path: &str, schema_path: &str, missing: Option<&str>) -> SchemaViolation {
        SchemaViolation {
            instance_path: instance_path.to_string(),
            schema_path: schema_path.to_string(),
            message: "is wrong".to_string(),
            missing_property: missing.map(String::from),
        }
    }

    #[test]
    fn test_missing_category_lists_vocabulary() {
        let message = schema_message(
            ContentKind::Command,
            &violation("", "/required", Some("category")),
        );
        assert_eq!(
            message,
            "Missing required field 'category'. Valid categories for commands: ci-deployment, \
             code-analysis-testing, context-loading-priming, documentation-changelogs, \
             project-task-management, version-control-git, miscellaneous"
        );
    }

    #[test]
    fn test_bad_category_lists_vocabulary() {
        let message = schema_message(
            ContentKind::Subagent,
            &violation("/category", "/properties/category/enum", None),
        );
        assert!(message.starts_with("Category is wrong. Valid categories for subagents: "));
        assert!(message.ends_with("specialized-domains, crypto-trading"));
    }

    #[test]
    fn test_description_and_field_prefixes() {
        assert_eq!(
            schema_message(
                ContentKind::Subagent,
                &violation("/description", "/properties/description/minLength", None)
            ),
            "Description is wrong"
        );
        assert_eq!(
            schema_message(
                ContentKind::Subagent,
                &violation("/tools", "/properties/tools/type", None)
            ),
            "Field 'tools' is wrong"
        );
        assert_eq!(
            schema_message(ContentKind::Subagent, &violation("", "/additionalProperties", None)),
            "is wrong"
        );
    }

    #[test]
    fn test_name_index_reports_other_paths() {
        let parse = |file: &str, name: &str| {
            ContentFile::parse(
                ContentKind::Subagent,
                file,
                format!("---\nname: {}\n---\nYou are", name),
            )
            .unwrap()
        };
        let files = vec![parse("a.md", "dup"), parse("b.md", "dup"), parse("c.md", "solo")];
        let index = NameIndex::build(files.iter());

        assert_eq!(index.others("dup", "subagents/a.md"), vec!["subagents/b.md"]);
        assert_eq!(index.others("dup", "subagents/b.md"), vec!["subagents/a.md"]);
        assert!(index.others("solo", "subagents/c.md").is_empty());
    }
}
