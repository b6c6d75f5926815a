//! Blocking HTTP GET through libcurl.
//!
//! One `Easy` handle per request, redirects followed. No timeout is set: a
//! stalled server stalls the calling word.

use crate::error::HttpError;

/// Prepares an `Easy` handle for a GET of `url`.
pub(crate) fn easy_get(url: &str) -> Result<curl::easy::Easy, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    Ok(easy)
}

/// GETs `url` and returns the whole body as bytes. Non-2xx is an error.
pub fn get_bytes(url: &str) -> Result<Vec<u8>, HttpError> {
    let mut body = Vec::new();
    let mut easy = easy_get(url)?;
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    tracing::debug!(url, code, bytes = body.len(), "GET complete");
    if !(200..300).contains(&code) {
        return Err(HttpError::Status {
            url: url.to_string(),
            code,
        });
    }
    Ok(body)
}

/// GETs `url` and returns the body as UTF-8 text.
pub fn get_text(url: &str) -> Result<String, HttpError> {
    let body = get_bytes(url)?;
    Ok(String::from_utf8(body)?)
}
