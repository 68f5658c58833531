//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → overlay: PORT environment variable, then CLI flags
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - Config is resolved exactly once at startup; there is no reload path
//! - All fields have defaults so the service runs with no file at all
//! - The bind address keeps the raw port string from the environment;
//!   an invalid value surfaces as a bind failure, not a config error

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use schema::DatastoreConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::ServerConfig;
pub use schema::ServiceConfig;
