use std::process::ExitCode;

use catalog_cli::output::command_report;
use catalog_cli::tools::{self, CommonArgs};
use clap::Parser;

/// Validate command files against the command schema
#[derive(Debug, Parser)]
#[command(name = "validate-commands", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let validation = tools::bootstrap(&cli.common.overrides())
        .and_then(|config| tools::validate_commands(&config));

    match validation {
        Ok(validation) => {
            for line in command_report(&validation) {
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
