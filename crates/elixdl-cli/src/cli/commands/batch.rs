//! `elixdl <word...>` – discover the API, then fetch every word.

use anyhow::Result;
use elixdl_core::batch::{BatchDriver, BatchSettings};
use elixdl_core::config::ElixConfig;
use elixdl_core::discovery;
use std::io;

/// Per-word failures are printed and skipped; only startup errors are returned.
pub fn run_batch(cfg: &ElixConfig, words: &[String]) -> Result<()> {
    let provider = discovery::provider_for(&cfg.api);
    let settings = BatchSettings {
        output_dir: cfg.output_dir.clone(),
        policy: cfg.mode,
    };
    let driver = BatchDriver::new(provider.as_ref(), settings)?;
    tracing::info!(
        words = words.len(),
        policy = ?driver.policy(),
        output_dir = %driver.output_dir().display(),
        "starting batch"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver.run(words, &mut out)?;
    Ok(())
}
