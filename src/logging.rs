use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "pixgal=info";

/// Default log location: `<cache dir>/pixgal/pixgal.log`, or `./pixgal.log` when the
/// platform has no cache directory.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("pixgal").join("pixgal.log"))
        .unwrap_or_else(|| PathBuf::from("pixgal.log"))
}

/// Install the global tracing subscriber.
///
/// The terminal is owned by the TUI while the gallery runs, so events go to a log file
/// instead of stdout. `RUST_LOG` overrides the default filter.
pub fn init_tracing(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
