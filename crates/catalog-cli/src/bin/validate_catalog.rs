use std::path::PathBuf;
use std::process::ExitCode;

use catalog_cli::output::{catalog_report, progress_line};
use catalog_cli::tools::{self, CommonArgs};
use clap::Parser;

/// Validate subagents and commands, writing a JSON report
#[derive(Debug, Parser)]
#[command(name = "validate-catalog", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Where to write the JSON report
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut overrides = cli.common.overrides();
    overrides.validation_report = cli.report;

    let validation = tools::bootstrap(&overrides).and_then(|config| {
        tools::validate_catalog(&config, |event| println!("{}", progress_line(event)))
    });

    match validation {
        Ok(validation) => {
            println!();
            for line in catalog_report(&validation) {
                println!("{}", line);
            }
            if validation.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
