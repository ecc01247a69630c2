use std::{fs::File, path::Path, sync::Arc};

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed tracing subscriber.
///
/// Without a log file nothing is installed, since output on the terminal
/// would corrupt the TUI.
pub fn init(log_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install log subscriber")?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
