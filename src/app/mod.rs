//! Application entry points.
//!
//! The process is launched with the name of an application to serve, the
//! way a process manager is pointed at a handler. The registry maps that
//! name to a router factory; resolution happens before any socket is
//! bound, and an unknown name is fatal.

pub mod registry;

pub use registry::{resolve, AppFactory, UnknownEntryPoint};
