//! Listener binding.
//!
//! # Responsibilities
//! - Parse the configured bind address
//! - Bind the socket once, before any worker starts
//! - Hand out non-blocking clones for the workers' runtimes

use std::net::{SocketAddr, TcpListener};

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug)]
pub enum ListenError {
    /// The configured bind address did not parse as host:port.
    Address(String, std::net::AddrParseError),
    /// The OS refused the bind.
    Bind(SocketAddr, std::io::Error),
}

impl std::fmt::Display for ListenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenError::Address(addr, e) => {
                write!(f, "invalid bind address \"{}\": {}", addr, e)
            }
            ListenError::Bind(addr, e) => write!(f, "failed to bind {}: {}", addr, e),
        }
    }
}

impl std::error::Error for ListenError {}

/// Bind the service listener.
///
/// Returns a non-blocking blocking-API listener; workers clone it and
/// register each clone with their own runtime.
pub fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenError> {
    let addr: SocketAddr = config
        .bind_address
        .parse()
        .map_err(|e| ListenError::Address(config.bind_address.clone(), e))?;

    let listener = TcpListener::bind(addr).map_err(|e| ListenError::Bind(addr, e))?;
    listener
        .set_nonblocking(true)
        .map_err(|e| ListenError::Bind(addr, e))?;

    let local_addr = listener.local_addr().map_err(|e| ListenError::Bind(addr, e))?;
    tracing::info!(address = %local_addr, "Listener bound");

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listener_config(bind_address: &str) -> ListenerConfig {
        ListenerConfig {
            bind_address: bind_address.to_string(),
            ..ListenerConfig::default()
        }
    }

    #[test]
    fn binds_an_ephemeral_port() {
        let listener = bind(&listener_config("127.0.0.1:0")).unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[test]
    fn malformed_port_fails_at_bind_time() {
        // This is where an invalid PORT value from the environment lands.
        let err = bind(&listener_config("0.0.0.0:not-a-port")).unwrap_err();
        assert!(matches!(err, ListenError::Address(_, _)));
    }
}
