//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (workers ≥ 1, timeouts > 0)
//! - Check the datastore base URL parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - The listener port is deliberately NOT validated here: a malformed
//!   value from the environment must fail at bind time

use url::Url;

use crate::config::schema::ServiceConfig;

/// A single semantic validation failure.
#[derive(Debug)]
pub enum ValidationError {
    ZeroWorkers,
    ZeroRequestTimeout,
    EmptyAppEntry,
    InvalidDatastoreUrl(url::ParseError),
    ZeroBodyLimit,
    ZeroConcurrencyLimit,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ZeroWorkers => write!(f, "server.workers must be at least 1"),
            ValidationError::ZeroRequestTimeout => {
                write!(f, "server.request_timeout_secs must be at least 1")
            }
            ValidationError::EmptyAppEntry => write!(f, "server.app_entry must not be empty"),
            ValidationError::InvalidDatastoreUrl(e) => {
                write!(f, "datastore.base_url is not a valid URL: {}", e)
            }
            ValidationError::ZeroBodyLimit => {
                write!(f, "listener.max_body_bytes must be at least 1")
            }
            ValidationError::ZeroConcurrencyLimit => {
                write!(f, "listener.max_concurrent_requests must be at least 1")
            }
        }
    }
}

/// Validate the resolved configuration, collecting every failure.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.workers == 0 {
        errors.push(ValidationError::ZeroWorkers);
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.server.app_entry.is_empty() {
        errors.push(ValidationError::EmptyAppEntry);
    }
    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }
    if config.listener.max_concurrent_requests == 0 {
        errors.push(ValidationError::ZeroConcurrencyLimit);
    }
    if let Err(e) = Url::parse(&config.datastore.base_url) {
        errors.push(ValidationError::InvalidDatastoreUrl(e));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
