//! CLI for elixdl.

mod commands;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use elixdl_core::config::{self, ElixConfig};
use elixdl_core::logging::LogTarget;
use elixdl_core::resolver::ResolvePolicy;
use std::path::PathBuf;

use commands::run_batch;

pub const USAGE: &str = "usage: elixdl <word...>";

/// Entry selection policy as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// First dictionary entry only; fail the word if it has no sign.
    Strict,
    /// Every non proper-noun entry that has a sign.
    Permissive,
}

impl From<Mode> for ResolvePolicy {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Strict => ResolvePolicy::Strict,
            Mode::Permissive => ResolvePolicy::Permissive,
        }
    }
}

/// Download sign-language videos for French words.
#[derive(Debug, Parser)]
#[command(name = "elixdl", disable_help_flag = true)]
pub struct Cli {
    /// Words to look up, processed in order. Anything after the first word,
    /// or any unknown dash argument, is taken as a word.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,

    /// Override the configured selection policy.
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Override the configured output directory.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read settings from this file instead of the XDG config.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print usage and exit.
    #[arg(short, long)]
    pub help: bool,
}

impl Cli {
    /// True when nothing should run besides printing usage.
    pub fn wants_usage(&self) -> bool {
        self.help || self.words.is_empty()
    }

    /// Applies command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, cfg: &mut ElixConfig) {
        if let Some(mode) = self.mode {
            cfg.mode = mode.into();
        }
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
    }

    /// Prints usage, or starts logging through `init_logs` and runs the batch.
    pub fn run(self, init_logs: impl FnOnce() -> LogTarget) -> Result<()> {
        if self.wants_usage() {
            println!("{}", USAGE);
            return Ok(());
        }

        let target = init_logs();
        tracing::debug!(?target, "logging initialized");

        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        self.apply_overrides(&mut cfg);
        tracing::debug!("loaded config: {:?}", cfg);

        run_batch(&cfg, &self.words)
    }
}

#[cfg(test)]
mod tests;
