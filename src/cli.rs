use clap::Parser;
use std::path::PathBuf;

use sw360_obligations::application::dto::OutputFormat;

/// Aggregate fulfilled license obligations across an SW360 project tree
#[derive(Parser, Debug)]
#[command(name = "sw360-obligations")]
#[command(version)]
#[command(
    about = "Aggregate fulfilled license obligations across an SW360 project and its linked projects",
    long_about = None
)]
pub struct Args {
    /// Id of the SW360 project to report on
    #[arg(short, long, value_name = "ID")]
    pub project: String,

    /// SW360 REST root, e.g. https://sw360.example.org/resource/api
    #[arg(short, long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Access token (falls back to the config file, then SW360_TOKEN)
    #[arg(short, long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Authorization scheme sent in front of the token (default: Bearer)
    #[arg(long, value_name = "SCHEME")]
    pub auth_scheme: Option<String>,

    /// Output format: json or markdown (default: markdown)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a config file (defaults to sw360-obligations.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of obligation requests in flight at once (1-16, default: 1)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..=16))]
    pub concurrency: Option<u16>,

    /// HTTP request timeout in seconds (default: 30)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Print progress details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
