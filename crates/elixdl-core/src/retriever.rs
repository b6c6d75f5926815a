//! Streams a media URL to a local file.
//!
//! The body is written chunk by chunk as libcurl delivers it. On failure the
//! partially written file is left in place; callers see a [`DownloadError`]
//! and decide what to do with it.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::DownloadError;
use crate::http;

/// GETs `url` into `dest` (created or truncated). Returns the number of bytes written.
///
/// HTTP errors (>= 400) abort before any body is written.
pub fn download(url: &str, dest: &Path) -> Result<u64, DownloadError> {
    let mut file = File::create(dest).map_err(|source| DownloadError::Create {
        path: dest.to_path_buf(),
        source,
    })?;
    let written = RefCell::new(0u64);
    let write_err: RefCell<Option<io::Error>> = RefCell::new(None);

    let mut easy = http::easy_get(url)?;
    easy.fail_on_error(true)?;

    let result = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                *written.borrow_mut() += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                tracing::warn!("write to {} failed: {}", dest.display(), e);
                *write_err.borrow_mut() = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    if let Err(e) = result {
        if let Some(io_err) = write_err.into_inner() {
            return Err(DownloadError::Write(io_err));
        }
        let code = easy.response_code().unwrap_or(0);
        if code >= 400 {
            return Err(DownloadError::Http { code });
        }
        return Err(DownloadError::Transfer(e));
    }

    file.flush().map_err(DownloadError::Write)?;
    let written = written.into_inner();
    tracing::debug!(url, dest = %dest.display(), bytes = written, "download complete");
    Ok(written)
}
