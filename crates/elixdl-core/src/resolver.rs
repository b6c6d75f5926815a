//! Word resolution: lookup response → download tasks.
//!
//! Two selection policies:
//! - `Strict`: first entry only; it must have a meaning, and that meaning a
//!   sign, or the word fails.
//! - `Permissive`: every entry that is not a proper noun and has a sign
//!   becomes its own task; an unmatched word yields no tasks.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::dictionary::{DictionaryClient, DictionaryEntry, WordsResponse};
use crate::error::ResolveError;
use crate::url_model;

/// Entry selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvePolicy {
    #[default]
    Strict,
    Permissive,
}

/// One file to fetch for a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub word: String,
    pub absolute_url: Url,
    pub local_filename: String,
}

impl DownloadTask {
    fn new(word: &str, absolute_url: Url, local_filename: String) -> Self {
        Self {
            word: word.to_string(),
            absolute_url,
            local_filename,
        }
    }
}

/// Looks `word` up and selects tasks according to `policy`.
pub fn resolve(
    client: &DictionaryClient,
    word: &str,
    policy: ResolvePolicy,
) -> Result<Vec<DownloadTask>, ResolveError> {
    let resp = client.lookup(word)?;
    select_tasks(word, &resp, &client.api().video_base_url, policy)
}

/// Pure selection over an already decoded response.
pub fn select_tasks(
    word: &str,
    resp: &WordsResponse,
    video_base_url: &Url,
    policy: ResolvePolicy,
) -> Result<Vec<DownloadTask>, ResolveError> {
    match policy {
        ResolvePolicy::Strict => select_strict(word, resp, video_base_url).map(|t| vec![t]),
        ResolvePolicy::Permissive => select_permissive(word, resp, video_base_url),
    }
}

fn select_strict(
    word: &str,
    resp: &WordsResponse,
    video_base_url: &Url,
) -> Result<DownloadTask, ResolveError> {
    if resp.is_empty() {
        return Err(ResolveError::UnknownWord(word.to_string()));
    }
    let entry = &resp.entries()[0];
    let meaning = entry
        .meanings()
        .first()
        .ok_or_else(|| ResolveError::NoMeaning(word.to_string()))?;
    let uri = meaning
        .first_sign_uri()
        .ok_or_else(|| ResolveError::NoSign(word.to_string()))?;

    let url = url_model::compose_url(video_base_url, uri)?;
    let filename = url_model::strict_filename(word, url_model::extension(&url));
    Ok(DownloadTask::new(word, url, filename))
}

fn select_permissive(
    word: &str,
    resp: &WordsResponse,
    video_base_url: &Url,
) -> Result<Vec<DownloadTask>, ResolveError> {
    if resp.is_empty() {
        tracing::info!(word, "no dictionary match");
        return Ok(Vec::new());
    }

    let mut tasks = Vec::new();
    for entry in resp.entries() {
        if entry.is_proper_noun() {
            tracing::debug!(word, name = ?entry.name, "skipping proper noun");
            continue;
        }
        let Some(uri) = entry.first_sign_uri() else {
            tracing::debug!(word, name = ?entry.name, "skipping entry without sign");
            continue;
        };
        let url = url_model::compose_url(video_base_url, uri)?;
        let filename = permissive_filename_for(word, entry, &url);
        tasks.push(DownloadTask::new(word, url, filename));
    }

    if tasks.is_empty() {
        tracing::info!(word, entries = resp.entries().len(), "no usable entry");
    }
    Ok(tasks)
}

fn permissive_filename_for(word: &str, entry: &DictionaryEntry, url: &Url) -> String {
    let name = entry
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(word);
    url_model::permissive_filename(name, entry.typology.as_deref(), url_model::extension(url))
}
