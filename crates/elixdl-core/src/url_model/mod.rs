//! URL composition and local filename derivation.
//!
//! Relative sign URIs are resolved against the video base URL with RFC 3986
//! rules; the local filename takes its extension from the composed URL.

mod sanitize;

pub use sanitize::{replace_unsafe_chars, truncate_to_bytes, NAME_MAX};

use url::Url;

use crate::error::ComposeError;

/// Used when sanitizing leaves nothing usable.
const DEFAULT_STEM: &str = "sign";

/// Resolves `relative` against `base`.
///
/// A path-relative URI replaces the last segment of the base path, an
/// absolute path replaces the whole path, and an absolute URL is returned
/// as-is.
///
/// # Examples
///
/// - `compose("https://v.example/media/", "/img/chat.mp4")` → `https://v.example/img/chat.mp4`
/// - `compose("https://v.example/media/", "chat.mp4")` → `https://v.example/media/chat.mp4`
pub fn compose(base: &str, relative: &str) -> Result<Url, ComposeError> {
    let base_url = Url::parse(base).map_err(|source| ComposeError::InvalidBase {
        base: base.to_string(),
        source,
    })?;
    compose_url(&base_url, relative)
}

/// Like [`compose`] with an already parsed base.
pub fn compose_url(base: &Url, relative: &str) -> Result<Url, ComposeError> {
    base.join(relative).map_err(|source| ComposeError::Join {
        base: base.to_string(),
        relative: relative.to_string(),
        source,
    })
}

/// Substring after the final `.` of the URL path, if any.
///
/// No check that it names a media type. A dot in a directory segment
/// (e.g. `/v1.2/clip`) does not count.
pub fn extension(url: &Url) -> Option<&str> {
    let path = url.path();
    let (_, ext) = path.rsplit_once('.')?;
    if ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext)
}

/// `<word>.<ext>`, used by the strict policy.
pub fn strict_filename(word: &str, ext: Option<&str>) -> String {
    finish(word.to_string(), ext)
}

/// `<name>_<typology>.<ext>`, used by the permissive policy.
pub fn permissive_filename(name: &str, typology: Option<&str>, ext: Option<&str>) -> String {
    let stem = match typology {
        Some(t) if !t.is_empty() => format!("{}_{}", name, t),
        _ => name.to_string(),
    };
    finish(stem, ext)
}

/// Makes `stem` safe as a file name, then appends `.ext`.
///
/// Only the stem is trimmed and truncated, so the extension always survives
/// intact and a typology ending in `.` keeps its dot before the extension.
fn finish(stem: String, ext: Option<&str>) -> String {
    let ext = ext.map(replace_unsafe_chars);
    let stem = replace_unsafe_chars(&stem);
    let mut stem = stem.trim_start_matches(|c: char| c == ' ' || c == '.');
    if ext.is_none() {
        stem = stem.trim_end_matches(|c: char| c == ' ' || c == '.');
    }
    if stem.is_empty() {
        stem = DEFAULT_STEM;
    }

    match ext {
        Some(ext) => {
            let budget = NAME_MAX.saturating_sub(ext.len() + 1).max(1);
            format!("{}.{}", truncate_to_bytes(stem, budget), ext)
        }
        None => truncate_to_bytes(stem, NAME_MAX).to_string(),
    }
}
