//! Shared application state.

use std::path::PathBuf;

/// Immutable server configuration shared with every handler
///
/// Built once at startup and never mutated. The root is carried here
/// explicitly instead of changing the process working directory, so
/// handlers have no dependency on ambient process state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonicalized root directory for static file serving
    pub root_dir: PathBuf,
}
