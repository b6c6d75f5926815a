//! Batch driver: runs resolve → compose → download for each word in order.
//!
//! Startup (output directory, API discovery) fails with [`InitError`] and
//! stops everything. After that, a failing word is reported on the console
//! and the next word is processed.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::dictionary::DictionaryClient;
use crate::discovery::{ApiConfig, ConfigProvider};
use crate::error::{InitError, WordError};
use crate::resolver::{self, ResolvePolicy};
use crate::retriever;

/// Run settings handed to the driver at construction.
#[derive(Debug, Clone)]
pub struct BatchSettings {
    pub output_dir: PathBuf,
    pub policy: ResolvePolicy,
}

/// Outcome of one word whose lookup succeeded.
#[derive(Debug, Default)]
pub struct WordReport {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<WordError>,
}

impl WordReport {
    /// Nothing was selected for download.
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty() && self.failed.is_empty()
    }
}

/// Processes words one at a time against a discovered API.
#[derive(Debug)]
pub struct BatchDriver {
    client: DictionaryClient,
    settings: BatchSettings,
}

impl BatchDriver {
    /// Creates the output directory (idempotent), then asks `provider` for the API settings.
    pub fn new(provider: &dyn ConfigProvider, settings: BatchSettings) -> Result<Self, InitError> {
        fs::create_dir_all(&settings.output_dir).map_err(|source| InitError::OutputDir {
            path: settings.output_dir.clone(),
            source,
        })?;
        let api = provider.discover()?;
        Ok(Self::with_api(api, settings))
    }

    /// Driver over already known API settings. The output directory must exist.
    pub fn with_api(api: ApiConfig, settings: BatchSettings) -> Self {
        Self {
            client: DictionaryClient::new(api),
            settings,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.settings.output_dir
    }

    pub fn policy(&self) -> ResolvePolicy {
        self.settings.policy
    }

    /// Runs the pipeline for one word.
    ///
    /// A resolution failure fails the whole word. Download failures are
    /// collected per task, and the word's remaining tasks still run.
    pub fn process_word(&self, word: &str) -> Result<WordReport, WordError> {
        let tasks = resolver::resolve(&self.client, word, self.settings.policy)?;
        let mut report = WordReport::default();
        for task in tasks {
            let dest = self.settings.output_dir.join(&task.local_filename);
            match retriever::download(task.absolute_url.as_str(), &dest) {
                Ok(bytes) => {
                    tracing::info!(word, dest = %dest.display(), bytes, "saved sign video");
                    report.saved.push(dest);
                }
                Err(source) => report.failed.push(WordError::Download {
                    url: task.absolute_url.to_string(),
                    source,
                }),
            }
        }
        Ok(report)
    }

    /// Processes `words` in input order, writing one notice per word (and per
    /// failure) to `out`. A failing word never stops the batch; only a failed
    /// write to `out` does.
    pub fn run<W: Write>(&self, words: &[String], out: &mut W) -> io::Result<()> {
        for word in words {
            writeln!(out, "Processing word {}", word)?;
            match self.process_word(word) {
                Ok(report) => {
                    if report.is_empty() {
                        writeln!(out, "No usable sign found for {}", word)?;
                    }
                    for path in &report.saved {
                        writeln!(out, "Saved {}", path.display())?;
                    }
                    for err in &report.failed {
                        report_failure(out, word, err)?;
                    }
                }
                Err(err) => report_failure(out, word, &err)?,
            }
        }
        Ok(())
    }
}

fn report_failure<W: Write>(out: &mut W, word: &str, err: &WordError) -> io::Result<()> {
    tracing::warn!(word, error = %err, "word failed");
    writeln!(out, "Error processing {}: {}", word, err)
}
