//! Error taxonomy.
//!
//! Two channels: [`InitError`] is fatal and ends the run before any word is
//! processed; [`WordError`] is caught per word by the batch driver.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single blocking GET.
#[derive(Debug, Error)]
pub enum HttpError {
    /// libcurl reported an error (DNS, connect, reset, invalid URL, ...).
    #[error("{0}")]
    Transfer(#[from] curl::Error),
    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    /// Body was expected to be text but is not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// API settings could not be obtained.
#[derive(Debug, Error)]
pub enum ConfigExtractionError {
    #[error("couldn't fetch script bundle: {0}")]
    Fetch(#[from] HttpError),
    #[error("couldn't find {what} in script bundle")]
    MissingPattern { what: &'static str },
    #[error("{what} is not an absolute URL: {value:?}")]
    InvalidUrl { what: &'static str, value: String },
    #[error("static API settings are missing {what}")]
    Incomplete { what: &'static str },
}

/// Joining a relative URI onto a base URL failed.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("invalid base URL {base:?}: {source}")]
    InvalidBase {
        base: String,
        source: url::ParseError,
    },
    #[error("cannot join {relative:?} onto {base}: {source}")]
    Join {
        base: String,
        relative: String,
        source: url::ParseError,
    },
}

/// A word could not be turned into download tasks.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Unknown word \"{0}\"")]
    UnknownWord(String),
    #[error("Word \"{0}\" doesn't have any known meanings")]
    NoMeaning(String),
    #[error("Word \"{0}\" doesn't have any known signs")]
    NoSign(String),
    #[error("lookup failed: {0}")]
    Lookup(#[from] HttpError),
    #[error("unexpected lookup response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// Streaming a media file to disk failed. A truncated file may remain.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("cannot create {path}: {source}")]
    Create { path: PathBuf, source: io::Error },
    #[error("transfer failed: {0}")]
    Transfer(#[from] curl::Error),
    #[error("server returned HTTP {code}")]
    Http { code: u32 },
    #[error("write failed: {0}")]
    Write(io::Error),
}

/// Per-word failure, reported and skipped by the batch driver.
#[derive(Debug, Error)]
pub enum WordError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("download of {url} failed: {source}")]
    Download { url: String, source: DownloadError },
}

/// Startup failure; aborts the whole run.
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigExtractionError),
    #[error("cannot create output directory {path}: {source}")]
    OutputDir { path: PathBuf, source: io::Error },
}
