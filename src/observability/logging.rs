//! Structured logging.
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to
//! this crate and tower_http. The unbuffered flag forces every event
//! straight to stdout, matching the deployment's expectation of
//! immediately visible log output.

use std::io::{self, Write};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::schema::LogFormat;
use crate::config::ObservabilityConfig;

pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "dialogue_indexer={level},tower_http={level}",
            level = config.log_level
        ))
    });

    let unbuffered = config.unbuffered_output;
    let make_writer = move || -> Box<dyn Write> {
        if unbuffered {
            Box::new(io::stdout())
        } else {
            Box::new(io::BufWriter::new(io::stdout()))
        }
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(make_writer)
                    .json(),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(make_writer))
            .init(),
    }
}
