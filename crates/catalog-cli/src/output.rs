//! Console report formatting
//!
//! Reports are built as lines so the binaries only print them.

use catalog_validate::{CatalogValidation, CommandStatus, CommandValidation, ValidationEvent};

const RULE_WIDTH: usize = 50;

/// Line-item report for the command validator
pub fn command_report(validation: &CommandValidation) -> Vec<String> {
    let mut lines = vec![format!(
        "Validating {} command files...",
        validation.results.len()
    )];
    lines.push(String::new());

    for result in &validation.results {
        match &result.status {
            CommandStatus::Valid => lines.push(format!("✅ {}: Valid", result.file)),
            CommandStatus::ValidWithWarnings(warnings) => {
                lines.push(format!("⚠️  {}: Valid with warnings", result.file));
                lines.extend(warnings.iter().map(|w| format!("   - {}", w)));
            }
            CommandStatus::Failed(failure) => {
                lines.push(format!("❌ {}: {}", result.file, failure.summary()));
                lines.extend(failure.details().iter().map(|d| format!("   - {}", d)));
            }
        }
    }

    lines.push(String::new());
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(String::new());

    if validation.has_errors() {
        lines.push("❌ Validation failed! Please fix the errors above.".to_string());
    } else {
        lines.push("✅ All command files are valid!".to_string());
    }

    lines
}

/// Progress line for the full validator
pub fn progress_line(event: ValidationEvent<'_>) -> String {
    match event {
        ValidationEvent::Started { total } => format!("Validating {} files...", total),
        ValidationEvent::Checking { file } => format!("Checking {}...", file),
    }
}

/// Summary report for the full validator
pub fn catalog_report(validation: &CatalogValidation) -> Vec<String> {
    let mut lines = vec!["Validation Report".to_string(), "=".repeat(RULE_WIDTH)];

    let errors: Vec<_> = validation.errors().collect();
    let warnings: Vec<_> = validation.warnings().collect();

    if !errors.is_empty() {
        lines.push(String::new());
        lines.push(format!("❌ Errors ({}):", errors.len()));
        lines.extend(errors.iter().map(|e| format!("  - {}: {}", e.file, e.message)));
    }

    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push(format!("⚠️  Warnings ({}):", warnings.len()));
        lines.extend(warnings.iter().map(|w| format!("  - {}: {}", w.file, w.message)));
    }

    if errors.is_empty() && warnings.is_empty() {
        lines.push(String::new());
        lines.push("✅ All validations passed!".to_string());
    }

    lines.push(String::new());
    if validation.has_errors() {
        lines.push("❌ Validation failed!".to_string());
    } else {
        lines.push("✅ Validation successful!".to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_types::ValidationIssue;
    use catalog_validate::commands::{CommandFailure, CommandFileResult};

    #[test]
    fn test_command_report_lines() {
        let validation = CommandValidation {
            results: vec![
                CommandFileResult {
                    file: "a.md".to_string(),
                    status: CommandStatus::Valid,
                },
                CommandFileResult {
                    file: "b.md".to_string(),
                    status: CommandStatus::ValidWithWarnings(vec!["careful".to_string()]),
                },
                CommandFileResult {
                    file: "c.md".to_string(),
                    status: CommandStatus::Failed(CommandFailure::Schema(vec![
                        "root: \"category\" is a required property".to_string(),
                    ])),
                },
            ],
        };

        let lines = command_report(&validation);
        assert_eq!(lines[0], "Validating 3 command files...");
        assert!(lines.contains(&"✅ a.md: Valid".to_string()));
        assert!(lines.contains(&"⚠️  b.md: Valid with warnings".to_string()));
        assert!(lines.contains(&"   - careful".to_string()));
        assert!(lines.contains(&"❌ c.md: Validation failed".to_string()));
        assert!(lines.contains(&"   - root: \"category\" is a required property".to_string()));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("❌ Validation failed! Please fix the errors above.")
        );
    }

    #[test]
    fn test_progress_lines() {
        assert_eq!(
            progress_line(ValidationEvent::Started { total: 3 }),
            "Validating 3 files..."
        );
        assert_eq!(
            progress_line(ValidationEvent::Checking {
                file: "subagents/rust-pro.md"
            }),
            "Checking subagents/rust-pro.md..."
        );
    }

    #[test]
    fn test_catalog_report_clean() {
        let lines = catalog_report(&CatalogValidation::default());
        assert!(lines.contains(&"✅ All validations passed!".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("✅ Validation successful!"));
    }

    #[test]
    fn test_catalog_report_with_issues() {
        let validation = CatalogValidation {
            total_files: 2,
            issues: vec![
                ValidationIssue::error("subagents/a.md", "No frontmatter found"),
                ValidationIssue::warning("commands/b.md", "Description is 600 characters (recommended: under 500)"),
            ],
        };
        let lines = catalog_report(&validation);
        assert!(lines.contains(&"❌ Errors (1):".to_string()));
        assert!(lines.contains(&"  - subagents/a.md: No frontmatter found".to_string()));
        assert!(lines.contains(&"⚠️  Warnings (1):".to_string()));
        assert!(!lines.contains(&"✅ All validations passed!".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("❌ Validation failed!"));
    }
}
