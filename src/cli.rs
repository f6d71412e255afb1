use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Find hand-written React components that duplicate design-system components
#[derive(Parser, Debug)]
#[command(name = "vibe-check")]
#[command(version)]
#[command(
    about = "Find hand-written React components that duplicate design-system components",
    long_about = None
)]
pub struct Args {
    /// React source files to check (.js, .jsx, .ts, .tsx)
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Output format: text, json or markdown [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Minimum similarity score (0-100) for a match to be reported [default: 70]
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Path to a config file (defaults to vibe-check.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Local JSON catalog file to match against
    /// Can be specified multiple times: --catalog acme.json --catalog extra.json
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalogs: Vec<PathBuf>,

    /// Exit with code 1 when any match is found
    #[arg(long)]
    pub fail_on_match: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
