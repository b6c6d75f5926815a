//! Tracing setup.
//!
//! Console output belongs to the batch notices on stdout, so diagnostics go to
//! `~/.local/state/elixdl/elixdl.log`, or to stderr when that file can't be opened.

use anyhow::Result;
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Lookups, saved files and per-word failures; HTTP detail needs `RUST_LOG=elixdl_core=debug`.
const DEFAULT_FILTER: &str = "warn,elixdl=info,elixdl_core=info";

/// Where diagnostics ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("elixdl")?;
    let log_dir = xdg_dirs.get_state_home().join("elixdl");
    fs::create_dir_all(&log_dir)?;
    Ok(log_dir.join("elixdl.log"))
}

fn open_log() -> Result<(PathBuf, File)> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Installs the global subscriber. Never fails: an unusable log file falls
/// back to stderr, and the reason is the first event logged there.
pub fn init() -> LogTarget {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);

    match open_log() {
        Ok((path, file)) => {
            let _ = builder.with_writer(Mutex::new(file)).try_init();
            tracing::debug!(log = %path.display(), "elixdl starting");
            LogTarget::File(path)
        }
        Err(err) => {
            let _ = builder.with_writer(std::io::stderr).try_init();
            tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
            LogTarget::Stderr
        }
    }
}
