//! Command-line interface.
//!
//! Mirrors the process-manager invocation the service is deployed with:
//! a named application entry point plus worker count, timeout, and bind
//! overrides. Flags left unset fall back to the config file (if any) and
//! its defaults; the bind address additionally falls back to the `PORT`
//! environment variable.

use std::path::PathBuf;

use clap::Parser;

use crate::config::schema::DEFAULT_APP_ENTRY;

#[derive(Parser, Debug)]
#[command(name = "dialogue-indexer")]
#[command(version)]
#[command(about = "Multi-worker HTTP service that builds the dialogue index", long_about = None)]
pub struct Cli {
    /// Application entry point to serve.
    #[arg(value_name = "APP", default_value = DEFAULT_APP_ENTRY)]
    pub app: String,

    /// Bind address (e.g., "0.0.0.0:8080"). Takes precedence over PORT.
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Number of workers accepting requests in parallel.
    #[arg(short = 'w', long, value_name = "N")]
    pub workers: Option<usize>,

    /// Per-request timeout in seconds.
    #[arg(short = 't', long = "timeout", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Path to a TOML configuration file.
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
