use clap::{Parser, Subcommand};

// Display order for log level option (placed at end of help text)
const LOG_LEVEL_DISPLAY_ORDER: usize = 100;

/// CLI arguments
#[derive(Parser)]
#[command(name = "lintgate", version, about = "Quality gate that verifies checks against fixtures", long_about = None)]
pub struct Cli {
    /// Log level (see https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
    /// [env: LINTGATE_LOG=] [default: info]
    #[arg(
        long,
        env = "LINTGATE_LOG",
        default_value = "info",
        global = true,
        hide_default_value = true,
        hide_env = true,
        display_order = LOG_LEVEL_DISPLAY_ORDER,
        verbatim_doc_comment
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the check verification suite
    Run(RunArgs),
    /// List registered checks
    List,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Root directory of the check fixtures
    #[arg(long, default_value = "fixtures")]
    pub fixtures: String,

    /// Verify only the named check (may be repeated; default: all)
    #[arg(long = "check")]
    pub checks: Vec<String>,

    /// Output file path (.json)
    #[arg(long)]
    pub output: Option<String>,
}
