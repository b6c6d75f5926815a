//! Scrapes API constants out of the web app's script bundle.

use regex::Regex;
use std::sync::LazyLock;

use super::{parse_base, ApiConfig, ConfigProvider};
use crate::error::ConfigExtractionError;
use crate::http;

static API_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""apiUrl":"([^"]+)"#).expect("valid regex"));
static API_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"apikey=(\w+)""#).expect("valid regex"));
static VIDEOS_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""videosUrl":"([^"]+)"#).expect("valid regex"));

/// Fetches the bundle at `bundle_url` and extracts [`ApiConfig`] from it.
#[derive(Debug, Clone)]
pub struct BundleScraper {
    pub bundle_url: String,
}

impl BundleScraper {
    pub fn new(bundle_url: impl Into<String>) -> Self {
        Self {
            bundle_url: bundle_url.into(),
        }
    }
}

impl ConfigProvider for BundleScraper {
    fn discover(&self) -> Result<ApiConfig, ConfigExtractionError> {
        tracing::debug!(url = %self.bundle_url, "fetching script bundle");
        let bundle = http::get_text(&self.bundle_url)?;
        let cfg = extract_api_config(&bundle)?;
        tracing::info!(
            api_url = %cfg.api_url,
            video_base_url = %cfg.video_base_url,
            "discovered API settings"
        );
        Ok(cfg)
    }
}

/// First capture group of the first match of `re`.
fn first_group<'a>(
    re: &Regex,
    haystack: &'a str,
    what: &'static str,
) -> Result<&'a str, ConfigExtractionError> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or(ConfigExtractionError::MissingPattern { what })
}

/// Extracts the API base URL, API key and video base URL from bundle text.
/// All three must be present; the URLs must be absolute.
pub fn extract_api_config(bundle: &str) -> Result<ApiConfig, ConfigExtractionError> {
    let api_url = first_group(&API_URL_RE, bundle, "api url")?;
    let api_key = first_group(&API_KEY_RE, bundle, "api key")?;
    let videos_url = first_group(&VIDEOS_URL_RE, bundle, "video base url")?;

    Ok(ApiConfig {
        api_url: parse_base("api url", api_url)?,
        api_key: Some(api_key.to_string()),
        video_base_url: parse_base("video base url", videos_url)?,
    })
}
