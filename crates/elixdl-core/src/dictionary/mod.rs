//! Dictionary lookup: `GET <api_url>/words?apikey=<key>&q=<word>`.

mod types;

pub use types::{DictionaryEntry, Meaning, WordSign, WordsResponse, PROPER_NOUN};

use url::Url;

use crate::discovery::ApiConfig;
use crate::error::{ComposeError, ResolveError};
use crate::http;
use crate::url_model;

/// Issues word lookups against the API described by an [`ApiConfig`].
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    api: ApiConfig,
}

impl DictionaryClient {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// `words` joined onto the API base, with `apikey` (when configured) and `q`.
    pub fn lookup_url(&self, word: &str) -> Result<Url, ComposeError> {
        let mut url = url_model::compose_url(&self.api.api_url, "words")?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(key) = &self.api.api_key {
                query.append_pair("apikey", key);
            }
            query.append_pair("q", word);
        }
        Ok(url)
    }

    /// Fetches and decodes the lookup response for `word`.
    pub fn lookup(&self, word: &str) -> Result<WordsResponse, ResolveError> {
        let url = self.lookup_url(word)?;
        tracing::debug!(word, url = %url, "dictionary lookup");
        let body = http::get_bytes(url.as_str())?;
        let resp: WordsResponse = serde_json::from_slice(&body)?;
        tracing::debug!(
            word,
            total = ?resp.total,
            entries = resp.entries().len(),
            "lookup decoded"
        );
        Ok(resp)
    }
}
