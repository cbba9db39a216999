use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Built-in defaults, the lowest configuration layer
const DEFAULT_CONFIG: &str = r#"
[paths]
root = "."
subagents_dir = "subagents"
commands_dir = "commands"
registry_output = "web-ui/public/registry.json"
validation_report = "validation-report.txt"

[schemas]
subagent = ""  # Empty: use the bundled schema
command = ""

[logging]
level = "warn"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct PathsConfig {
    pub root: PathBuf,
    pub subagents_dir: PathBuf,
    pub commands_dir: PathBuf,
    pub registry_output: PathBuf,
    pub validation_report: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SchemasConfig {
    pub subagent: String,
    pub command: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub paths: PathsConfig,
    pub schemas: SchemasConfig,
    pub logging: LoggingConfig,
}

/// Values given on the command line, applied last
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub log_level: Option<String>,
    pub registry_output: Option<PathBuf>,
    pub validation_report: Option<PathBuf>,
}

impl Config {
    /// User config path: <config dir>/agent-catalog/catalog.toml
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("agent-catalog").join("catalog.toml"))
    }

    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. User config: <config dir>/agent-catalog/catalog.toml (optional)
    /// 3. Local override: ./catalog.toml (optional)
    /// 4. Environment variables with CATALOG__ prefix
    /// 5. Command-line flags (highest priority)
    pub fn load(overrides: &Overrides) -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = Self::user_config_path() {
            config_builder = config_builder.add_source(config::File::from(path).required(false));
        }

        config_builder = config_builder
            .add_source(config::File::with_name("catalog").required(false))
            .add_source(config::Environment::with_prefix("CATALOG").separator("__"));

        if let Some(root) = &overrides.root {
            config_builder =
                config_builder.set_override("paths.root", root.to_string_lossy().into_owned())?;
        }
        if let Some(level) = &overrides.log_level {
            config_builder = config_builder.set_override("logging.level", level.as_str())?;
        }
        if let Some(output) = &overrides.registry_output {
            config_builder = config_builder
                .set_override("paths.registry_output", output.to_string_lossy().into_owned())?;
        }
        if let Some(report) = &overrides.validation_report {
            config_builder = config_builder.set_override(
                "paths.validation_report",
                report.to_string_lossy().into_owned(),
            )?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.paths.root.join(path)
        }
    }

    pub fn subagents_dir(&self) -> PathBuf {
        self.resolve(&self.paths.subagents_dir)
    }

    pub fn commands_dir(&self) -> PathBuf {
        self.resolve(&self.paths.commands_dir)
    }

    pub fn registry_output(&self) -> PathBuf {
        self.resolve(&self.paths.registry_output)
    }

    pub fn validation_report(&self) -> PathBuf {
        self.resolve(&self.paths.validation_report)
    }

    /// Override path for the subagent schema, if configured
    pub fn subagent_schema(&self) -> Option<PathBuf> {
        Some(self.schemas.subagent.trim())
            .filter(|p| !p.is_empty())
            .map(|p| self.resolve(Path::new(p)))
    }

    /// Override path for the command schema, if configured
    pub fn command_schema(&self) -> Option<PathBuf> {
        Some(self.schemas.command.trim())
            .filter(|p| !p.is_empty())
            .map(|p| self.resolve(Path::new(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_root_override() {
        let config = Config::load(&Overrides {
            root: Some(PathBuf::from("/srv/catalog")),
            ..Overrides::default()
        })
        .unwrap();

        assert_eq!(config.subagents_dir(), PathBuf::from("/srv/catalog/subagents"));
        assert_eq!(config.commands_dir(), PathBuf::from("/srv/catalog/commands"));
        assert_eq!(
            config.registry_output(),
            PathBuf::from("/srv/catalog/web-ui/public/registry.json")
        );
        assert_eq!(
            config.validation_report(),
            PathBuf::from("/srv/catalog/validation-report.txt")
        );
        assert_eq!(config.subagent_schema(), None);
        assert_eq!(config.command_schema(), None);
    }

    #[test]
    fn test_flag_overrides_win() {
        let config = Config::load(&Overrides {
            root: Some(PathBuf::from("/srv/catalog")),
            log_level: Some("debug".to_string()),
            registry_output: Some(PathBuf::from("/tmp/out/registry.json")),
            validation_report: Some(PathBuf::from("reports/latest.json")),
        })
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.registry_output(), PathBuf::from("/tmp/out/registry.json"));
        assert_eq!(
            config.validation_report(),
            PathBuf::from("/srv/catalog/reports/latest.json")
        );
    }
}
