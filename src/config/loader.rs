//! Configuration loading and resolution.
//!
//! Resolution order, lowest precedence first: built-in defaults, the
//! optional TOML file, the `PORT` environment variable, CLI flags. The
//! resolved config is validated once and never changes afterwards.

use std::fs;
use std::path::Path;

use crate::config::cli::Cli;
use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration resolution.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse a TOML config file without validating it.
fn parse_file(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Resolve the full service configuration from CLI, environment, and the
/// optional config file.
pub fn resolve(cli: &Cli) -> Result<ServiceConfig, ConfigError> {
    resolve_with_env(cli, |key| std::env::var(key).ok())
}

/// Resolution with an injectable environment lookup.
///
/// The `PORT` value is used verbatim: a non-numeric port produces a bind
/// address that fails when the listener binds, not here.
pub fn resolve_with_env(
    cli: &Cli,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => parse_file(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    } else if let Some(port) = env("PORT") {
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }

    // The hosting environment disables output buffering with a flag;
    // anything but "0" keeps per-event flushing on.
    if let Some(value) = env("LOG_UNBUFFERED") {
        config.observability.unbuffered_output = value != "0";
    }

    if let Some(workers) = cli.workers {
        config.server.workers = workers;
    }
    if let Some(timeout) = cli.timeout_secs {
        config.server.request_timeout_secs = timeout;
    }
    config.server.app_entry = cli.app.clone();

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
