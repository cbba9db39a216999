use std::path::PathBuf;
use std::process::ExitCode;

use catalog_cli::tools::{self, CommonArgs};
use clap::Parser;

/// Aggregate subagent and command frontmatter into registry.json
#[derive(Debug, Parser)]
#[command(name = "generate-registry", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Where to write the registry
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut overrides = cli.common.overrides();
    overrides.registry_output = cli.output;

    println!("Generating registry.json...");

    let result = match tools::bootstrap(&overrides) {
        Ok(config) => tools::generate_registry(&config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(summary) => {
            println!("✓ Registry generated successfully!");
            println!("  - {} subagents", summary.subagents);
            println!("  - {} commands", summary.commands);
            println!("  - Output: {}", summary.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error generating registry: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
