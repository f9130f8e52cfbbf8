mod cli;

use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use lintgate::suite::{self, CheckReport};
use lintgate::registry;
use std::path::Path;
use tracing::{error, info};

const EXIT_FAILURE: i32 = 1;

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&cli.log_level))
        .init();

    match &cli.command {
        Commands::Run(args) => run(args),
        Commands::List => {
            for name in registry::CHECKS {
                println!("{name}");
            }
        }
    }
}

fn run(args: &RunArgs) {
    let checks = selected_checks(&args.checks).unwrap_or_else(|unknown| {
        error!("Unknown check '{}'; see `lintgate list`", unknown);
        std::process::exit(EXIT_FAILURE);
    });

    let reports = suite::run_suite(Path::new(&args.fixtures), &checks);
    let failed = reports.iter().filter(|report| !report.passed).count();

    if let Some(path) = &args.output {
        write_output(path, &reports);
    }

    if failed > 0 {
        error!(
            "Suite failed: {} passed, {} failed",
            reports.len() - failed,
            failed
        );
        std::process::exit(EXIT_FAILURE);
    }
    info!("Suite passed: {} checks verified", reports.len());
}

/// Resolve the `--check` filters against the registry, preserving registry
/// order. An empty filter list selects every registered check.
fn selected_checks(filters: &[String]) -> Result<Vec<&'static str>, String> {
    if filters.is_empty() {
        return Ok(registry::CHECKS.to_vec());
    }
    for filter in filters {
        if !registry::CHECKS.contains(&filter.as_str()) {
            return Err(filter.clone());
        }
    }
    Ok(registry::CHECKS
        .iter()
        .copied()
        .filter(|name| filters.iter().any(|filter| filter == name))
        .collect())
}

fn write_output(path: &str, reports: &[CheckReport]) {
    if !path.ends_with(".json") {
        error!("Output file must end with .json");
        std::process::exit(EXIT_FAILURE);
    }

    let content = match serde_json::to_string_pretty(reports) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to serialize reports: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    if let Err(e) = std::fs::write(path, content) {
        error!("Failed to write output file: {}", e);
        std::process::exit(EXIT_FAILURE);
    }

    info!("Results written to {}", path);
}
