use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use schools_map_ingest::SchoolsResult;
use schools_map_ingest::ingestion::{ParseOptions, StdErrObserver, parse_from_path};
use schools_map_ingest::registry::DistrictRegistry;

/// Parse a schools workbook and print the normalized payload as JSON.
#[derive(Debug, Parser)]
#[command(name = "schools-map-dump", version, about)]
struct Cli {
    /// Workbook to parse.
    #[arg(default_value = "data.xlsx")]
    path: PathBuf,

    /// Registry JSON file (array of {"name", "id"}); defaults to the built-in registry.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Log parse outcome to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> SchoolsResult<String> {
    let registry = match &cli.registry {
        Some(path) => DistrictRegistry::from_json_path(path)?,
        None => DistrictRegistry::builtin(),
    };
    let mut options = ParseOptions::with_registry(registry);
    if cli.verbose {
        options.observer = Some(Arc::new(StdErrObserver));
    }

    let payload = parse_from_path(&cli.path, &options)?;
    let json = if cli.compact {
        serde_json::to_string(&payload)?
    } else {
        serde_json::to_string_pretty(&payload)?
    };
    Ok(json)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
