//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Logs to stderr, filtered by `RUST_LOG` or `default_filter`.
pub fn init_stderr_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init(); // Don't panic if already initialized
}

/// Logs to `path` so output does not corrupt a full-screen UI.
pub fn init_file_tracing(path: impl AsRef<Path>, default_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path.as_ref())
        .with_context(|| format!("Failed to create log file {}", path.as_ref().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
