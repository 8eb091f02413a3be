//! Runtime configuration
//!
//! Everything is taken from the environment; there is no config file.

use std::path::PathBuf;

/// Environment variable overriding the database location
pub const DATABASE_PATH_VAR: &str = "MACROLOG_DATABASE_PATH";

/// Default log filter directive, extended by `RUST_LOG`
pub const DEFAULT_LOG_DIRECTIVE: &str = "macrolog=info";

/// Database path from `MACROLOG_DATABASE_PATH`, or `data/macrolog.db` under the project root
pub fn database_path() -> PathBuf {
    std::env::var(DATABASE_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_database_path())
}

fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("data");
    path.push("macrolog.db");
    path
}
