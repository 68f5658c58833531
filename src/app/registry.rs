//! Entry-point registry.
//!
//! # Design Decisions
//! - Registration is a compile-time table; there is no dynamic loading
//! - Resolution failure names the known entry points, then the process
//!   exits non-zero without binding anything

use axum::Router;

use crate::http::server::{index_builder_app, AppState};

/// A factory producing the router for one application entry point.
pub type AppFactory = fn(AppState) -> Router;

const ENTRY_POINTS: &[(&str, AppFactory)] = &[("index_builder", index_builder_app as AppFactory)];

/// Error returned when the named entry point is not registered.
#[derive(Debug)]
pub struct UnknownEntryPoint {
    requested: String,
}

impl std::fmt::Display for UnknownEntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown application entry point \"{}\" (known: ",
            self.requested
        )?;
        for (i, name) in known().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for UnknownEntryPoint {}

/// Look up the factory for a named entry point.
pub fn resolve(name: &str) -> Result<AppFactory, UnknownEntryPoint> {
    ENTRY_POINTS
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, factory)| *factory)
        .ok_or_else(|| UnknownEntryPoint {
            requested: name.to_string(),
        })
}

/// Names of every registered entry point.
pub fn known() -> impl Iterator<Item = &'static str> {
    ENTRY_POINTS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_the_default_entry_point() {
        assert!(resolve("index_builder").is_ok());
    }

    #[test]
    fn unknown_entry_point_is_an_error_naming_the_alternatives() {
        let err = resolve("main:app").unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("main:app"));
        assert!(rendered.contains("index_builder"));
    }
}
