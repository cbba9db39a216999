//! One function per tool; the binaries handle printing and exit status

use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog_registry::{write_registry, RegistryBuilder};
use catalog_validate::{
    CatalogValidation, CatalogValidator, CommandValidation, CommandValidator, FrontmatterSchema,
    SchemaSet, ValidationEvent, ValidationReport,
};
use chrono::Utc;
use clap::Args;
use tracing::info;

use crate::config::{Config, Overrides};

/// Flags every tool accepts
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Catalog root containing the subagents/ and commands/ directories
    #[arg(long, env = "CATALOG_ROOT")]
    pub root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl CommonArgs {
    /// Command-line overrides for [`Config::load`]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            root: self.root.clone(),
            log_level: self.log_level.clone(),
            ..Overrides::default()
        }
    }
}

/// Load configuration and start logging
pub fn bootstrap(overrides: &Overrides) -> Result<Config> {
    let config = Config::load(overrides).context("Failed to load configuration")?;
    catalog_logging::init_logging(&config.logging.level)?;
    Ok(config)
}

/// What a registry run produced
#[derive(Debug, Clone)]
pub struct RegistrySummary {
    pub subagents: usize,
    pub commands: usize,
    pub output: PathBuf,
}

/// Build and write `registry.json`. Nothing is written on failure.
pub async fn generate_registry(config: &Config) -> Result<RegistrySummary> {
    let builder = RegistryBuilder::new(config.subagents_dir(), config.commands_dir());
    let registry = builder.build(Utc::now()).await?;

    let output = config.registry_output();
    write_registry(&registry, &output).await?;

    Ok(RegistrySummary {
        subagents: registry.subagents.len(),
        commands: registry.commands.len(),
        output,
    })
}

/// Validate every command file
pub fn validate_commands(config: &Config) -> Result<CommandValidation> {
    let schema = match config.command_schema() {
        Some(path) => FrontmatterSchema::from_file(&path)?,
        None => FrontmatterSchema::builtin(catalog_types::ContentKind::Command)?,
    };
    let validator = CommandValidator::new(schema)?;
    let validation = validator.validate_dir(&config.commands_dir())?;
    info!(
        "{} of {} command files failed",
        validation.failed_count(),
        validation.results.len()
    );
    Ok(validation)
}

/// Validate both content directories and write the JSON report.
///
/// `on_event` sees the file count before any file is checked and each file
/// as it is reached. The report is written whether or not errors were found.
pub fn validate_catalog(
    config: &Config,
    on_event: impl FnMut(ValidationEvent<'_>),
) -> Result<CatalogValidation> {
    let subagent_schema = config.subagent_schema();
    let command_schema = config.command_schema();
    let schemas = SchemaSet::load(subagent_schema.as_deref(), command_schema.as_deref())?;

    let validator =
        CatalogValidator::new(schemas, config.subagents_dir(), config.commands_dir())?;
    let validation = validator.validate_with(on_event)?;

    let report_path = config.validation_report();
    ValidationReport::new(&validation, Utc::now())
        .write_to(&report_path)
        .with_context(|| format!("Failed to write report to {}", report_path.display()))?;

    Ok(validation)
}
