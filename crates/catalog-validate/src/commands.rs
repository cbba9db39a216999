//! Command file validation
//!
//! Each file runs through a fixed sequence: frontmatter present, schema
//! conformance, body present, then the advisory heuristics. The first three
//! stop at the first failure; the heuristics all run once reached.

use std::path::Path;

use catalog_content::{discover, ContentFile, DiscoveryFilter};
use catalog_types::{ContentKind, Result};
use tracing::{debug, info};

use crate::rules::{argument_hint_mismatch, ContentRules};
use crate::schema::FrontmatterSchema;

/// Outcome for one command file
#[derive(Debug, Clone, PartialEq)]
pub enum CommandStatus {
    /// Passed everything
    Valid,
    /// Passed, with advisory warnings
    ValidWithWarnings(Vec<String>),
    /// Blocking failure
    Failed(CommandFailure),
}

/// Why a command file failed
#[derive(Debug, Clone, PartialEq)]
pub enum CommandFailure {
    /// The file has no frontmatter keys
    NoFrontmatter,
    /// One line per violation: `<field path or root>: <message>`
    Schema(Vec<String>),
    /// Nothing after the frontmatter block
    NoContent,
    /// The file could not be read or its frontmatter parsed
    Unparseable(String),
}

impl CommandFailure {
    /// Headline for the report line
    pub fn summary(&self) -> String {
        match self {
            CommandFailure::NoFrontmatter => "No frontmatter found".to_string(),
            CommandFailure::Schema(_) => "Validation failed".to_string(),
            CommandFailure::NoContent => "No content found after frontmatter".to_string(),
            CommandFailure::Unparseable(reason) => format!("Error parsing file - {}", reason),
        }
    }

    /// Detail lines under the headline
    pub fn details(&self) -> &[String] {
        match self {
            CommandFailure::Schema(lines) => lines,
            _ => &[],
        }
    }
}

/// A command file and its outcome
#[derive(Debug, Clone, PartialEq)]
pub struct CommandFileResult {
    /// Base name of the file
    pub file: String,
    /// What happened
    pub status: CommandStatus,
}

/// Results for a whole commands directory, in file-name order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandValidation {
    /// One entry per file
    pub results: Vec<CommandFileResult>,
}

impl CommandValidation {
    /// True if any file failed
    pub fn has_errors(&self) -> bool {
        self.results
            .iter()
            .any(|r| matches!(r.status, CommandStatus::Failed(_)))
    }

    /// Number of files that failed
    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, CommandStatus::Failed(_)))
            .count()
    }
}

/// Validates command files against the command schema and heuristics
pub struct CommandValidator {
    schema: FrontmatterSchema,
    rules: ContentRules,
}

impl CommandValidator {
    /// Create a validator using the given command schema
    pub fn new(schema: FrontmatterSchema) -> Result<Self> {
        Ok(Self {
            schema,
            rules: ContentRules::new()?,
        })
    }

    /// Validate every command file in `dir`.
    ///
    /// Only an unreadable directory is an `Err`; per-file problems are
    /// results.
    pub fn validate_dir(&self, dir: &Path) -> Result<CommandValidation> {
        let files = discover(dir, ContentKind::Command, DiscoveryFilter::SkipIndexFiles)?;
        info!("Validating {} command files in {:?}", files.len(), dir);

        let results = files
            .iter()
            .map(|found| {
                debug!("Checking {:?}", found.path);
                let status = match ContentFile::load(ContentKind::Command, &found.path) {
                    Ok(file) => self.validate_file(&file),
                    Err(e) => CommandStatus::Failed(CommandFailure::Unparseable(e.to_string())),
                };
                CommandFileResult {
                    file: found.file_name.clone(),
                    status,
                }
            })
            .collect();

        Ok(CommandValidation { results })
    }

    /// Validate file text that has already been read
    pub fn validate_source(&self, file_name: &str, raw: String) -> CommandStatus {
        match ContentFile::parse(ContentKind::Command, file_name, raw) {
            Ok(file) => self.validate_file(&file),
            Err(e) => CommandStatus::Failed(CommandFailure::Unparseable(e.to_string())),
        }
    }

    /// Validate a parsed command file
    pub fn validate_file(&self, file: &ContentFile) -> CommandStatus {
        if file.frontmatter.is_empty() {
            return CommandStatus::Failed(CommandFailure::NoFrontmatter);
        }

        let violations = self.schema.validate(&file.frontmatter.to_value());
        if !violations.is_empty() {
            let lines = violations
                .iter()
                .map(|v| {
                    let location = if v.instance_path.is_empty() {
                        "root"
                    } else {
                        v.instance_path.as_str()
                    };
                    format!("{}: {}", location, v.message)
                })
                .collect();
            return CommandStatus::Failed(CommandFailure::Schema(lines));
        }

        let body = file.body.trim();
        if body.is_empty() {
            return CommandStatus::Failed(CommandFailure::NoContent);
        }

        let mut warnings = Vec::new();

        if self.rules.opens_with_persona(body) {
            warnings.push(
                "Content starts with \"You are a...\" - consider using direct instructions instead"
                    .to_string(),
            );
        }

        if let Some(warning) = argument_hint_mismatch(body, file.frontmatter.is_set("argument-hint"))
        {
            warnings.push(warning.to_string());
        }

        if !self.rules.has_action_verb(body) {
            warnings.push("Content may lack actionable instructions".to_string());
        }

        if warnings.is_empty() {
            CommandStatus::Valid
        } else {
            CommandStatus::ValidWithWarnings(warnings)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn validator() -> CommandValidator {
        CommandValidator::new(FrontmatterSchema::builtin(ContentKind::Command).unwrap()).unwrap()
    }

    fn check(raw: &str) -> CommandStatus {
        validator().validate_source("cmd.md", raw.to_string())
    }

    #[test]
    fn test_valid_command() {
        let status = check(
            "---\ndescription: Run tests\ncategory: code-analysis-testing\n---\nRun the full test suite and fix failures.\n",
        );
        assert_eq!(status, CommandStatus::Valid);
    }

    #[test]
    fn test_missing_frontmatter() {
        let status = check("Run the tests.\n");
        assert_eq!(status, CommandStatus::Failed(CommandFailure::NoFrontmatter));
    }

    #[test]
    fn test_schema_failure_lists_each_violation() {
        let status = check("---\ndescription: Deploy\ncategory: cooking\nflavour: spicy\n---\nDeploy it.\n");
        let CommandStatus::Failed(CommandFailure::Schema(lines)) = status else {
            panic!("expected schema failure, got {:?}", status);
        };
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().any(|l| l.starts_with("/category: ")));
        assert!(lines.iter().any(|l| l.starts_with("root: ")));
    }

    #[test]
    fn test_schema_failure_short_circuits_body_check() {
        let status = check("---\ndescription: Deploy\n---\n");
        assert!(matches!(
            status,
            CommandStatus::Failed(CommandFailure::Schema(_))
        ));
    }

    #[test]
    fn test_empty_body() {
        let status = check("---\ndescription: Deploy\ncategory: ci-deployment\n---\n   \n\n");
        assert_eq!(status, CommandStatus::Failed(CommandFailure::NoContent));
    }

    #[test]
    fn test_arguments_without_hint_is_only_a_warning() {
        let status = check(
            "---\ndescription: Fix an issue\ncategory: project-task-management\n---\nFix issue $ARGUMENTS and run the tests.\n",
        );
        assert_eq!(
            status,
            CommandStatus::ValidWithWarnings(vec![
                "Uses $ARGUMENTS but no argument-hint provided in frontmatter".to_string()
            ])
        );
    }

    #[test]
    fn test_hint_without_arguments() {
        let status = check(
            "---\ndescription: Fix\ncategory: miscellaneous\nargument-hint: <issue>\n---\nFix the issue.\n",
        );
        assert_eq!(
            status,
            CommandStatus::ValidWithWarnings(vec![
                "Has argument-hint but doesn't use $ARGUMENTS in content".to_string()
            ])
        );
    }

    #[test]
    fn test_persona_and_no_action_verbs() {
        let status = check(
            "---\ndescription: Persona\ncategory: miscellaneous\n---\nYou are an assistant who likes tea.\n",
        );
        let CommandStatus::ValidWithWarnings(warnings) = status else {
            panic!("expected warnings, got {:?}", status);
        };
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("Content starts with"));
        assert_eq!(warnings[1], "Content may lack actionable instructions");
    }

    #[test]
    fn test_unparseable_frontmatter() {
        let status = check("---\ndescription: [oops\n---\nRun.\n");
        let CommandStatus::Failed(failure) = status else {
            panic!("expected failure");
        };
        assert!(failure.summary().starts_with("Error parsing file - "));
    }
}
