//! API settings discovery.
//!
//! The rest of the pipeline only sees [`ApiConfig`] through the
//! [`ConfigProvider`] trait, so the bundle scraper can be swapped for a
//! fixed configuration without touching resolution or download.

mod scrape;

pub use scrape::{extract_api_config, BundleScraper};

use url::Url;

use crate::config::{ApiSettings, ApiSource};
use crate::error::ConfigExtractionError;

/// Dictionary API location and credentials. Immutable for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base of the dictionary API; `words` is joined onto it.
    pub api_url: Url,
    /// Sent as `apikey` on lookups when present.
    pub api_key: Option<String>,
    /// Base that relative sign URIs resolve against.
    pub video_base_url: Url,
}

/// Source of [`ApiConfig`] (scraped bundle, static settings, test fixture...).
pub trait ConfigProvider {
    fn discover(&self) -> Result<ApiConfig, ConfigExtractionError>;
}

/// Provider backed by values written in the config file.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub videos_url: Option<String>,
}

impl ConfigProvider for StaticProvider {
    fn discover(&self) -> Result<ApiConfig, ConfigExtractionError> {
        let api_url = self
            .api_url
            .as_deref()
            .ok_or(ConfigExtractionError::Incomplete { what: "api_url" })?;
        let videos_url = self
            .videos_url
            .as_deref()
            .ok_or(ConfigExtractionError::Incomplete { what: "videos_url" })?;
        Ok(ApiConfig {
            api_url: parse_base("api url", api_url)?,
            api_key: self.api_key.clone().filter(|k| !k.is_empty()),
            video_base_url: parse_base("video base url", videos_url)?,
        })
    }
}

/// Builds the provider selected by `[api] source`.
pub fn provider_for(settings: &ApiSettings) -> Box<dyn ConfigProvider> {
    match settings.source {
        ApiSource::Discover => Box::new(BundleScraper::new(settings.bundle_url.clone())),
        ApiSource::Static => Box::new(StaticProvider {
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
            videos_url: settings.videos_url.clone(),
        }),
    }
}

/// Parses an untrusted value that must be an absolute, joinable URL.
fn parse_base(what: &'static str, value: &str) -> Result<Url, ConfigExtractionError> {
    match Url::parse(value) {
        Ok(u) if !u.cannot_be_a_base() => Ok(u),
        _ => Err(ConfigExtractionError::InvalidUrl {
            what,
            value: value.to_string(),
        }),
    }
}
