use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::ResolvePolicy;

/// Script bundle the API constants are scraped from.
pub const DEFAULT_BUNDLE_URL: &str = "https://dico.elix-lsf.fr/js/app.bundle.js";

/// Output folder, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

/// Where the API base URL, key and video base URL come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiSource {
    /// Scrape them out of the script bundle at `bundle_url`.
    #[default]
    Discover,
    /// Use `api_url`, `api_key` and `videos_url` as written in the config file.
    Static,
}

/// `[api]` section of config.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default)]
    pub source: ApiSource,
    #[serde(default = "default_bundle_url")]
    pub bundle_url: String,
    /// Dictionary API base (static source only).
    #[serde(default)]
    pub api_url: Option<String>,
    /// Static API key. When absent, lookups are sent without `apikey`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL that relative sign URIs are joined onto (static source only).
    #[serde(default)]
    pub videos_url: Option<String>,
}

fn default_bundle_url() -> String {
    DEFAULT_BUNDLE_URL.to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            source: ApiSource::Discover,
            bundle_url: default_bundle_url(),
            api_url: None,
            api_key: None,
            videos_url: None,
        }
    }
}

/// Global configuration loaded from `~/.config/elixdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElixConfig {
    /// Directory downloaded videos are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Entry selection policy: "strict" (first entry only) or "permissive" (every usable entry).
    #[serde(default)]
    pub mode: ResolvePolicy,
    #[serde(default)]
    pub api: ApiSettings,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for ElixConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            mode: ResolvePolicy::default(),
            api: ApiSettings::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("elixdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ElixConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ElixConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file (e.g. `--config`).
pub fn load_from_path(path: &Path) -> Result<ElixConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ElixConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
