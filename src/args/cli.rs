use std::time::Duration;

use clap::Parser;

use super::parsers::{parse_count, parse_duration_ms};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP GET fan-out harness - fires N requests at once and reports per-request outcomes plus a final success/failure summary."
)]
pub struct CliArgs {
    /// Number of requests to issue; anything unparsable or zero falls back to 1
    #[arg(default_value = "1", value_parser = parse_count, allow_hyphen_values = true)]
    pub count: u64,

    /// Target host
    #[arg(long, env = "VOLLEY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Target port
    #[arg(long, env = "VOLLEY_PORT", default_value_t = 8888)]
    pub port: u16,

    /// Target path
    #[arg(long, env = "VOLLEY_PATH", default_value = "/hello/")]
    pub path: String,

    /// Request timeout in milliseconds
    #[arg(long = "timeout", env = "VOLLEY_TIMEOUT_MS", default_value = "10000", value_parser = parse_duration_ms)]
    pub timeout: Duration,

    /// Path to a TOML config file (volley.toml in the working directory is
    /// picked up automatically)
    #[arg(long, short)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long)]
    pub no_color: bool,
}
