//! Blocking HTTP GET via libcurl (curl crate).
//!
//! Two shapes: `get_page` buffers a whole catalog page, `download_to` streams a
//! file body into a writer chunk by chunk. Both follow redirects and send no
//! headers beyond libcurl's defaults (plus an optional User-Agent).

use crate::error::FetchError;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Transfer options shared by page and file requests.
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    /// Connect timeout; `None` leaves libcurl's default.
    pub connect_timeout: Option<Duration>,
    /// Whole-transfer timeout; `None` means a stalled transfer blocks forever.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

/// A fetched page: status code plus raw body bytes.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl PageResponse {
    pub fn is_success(&self) -> bool {
        is_success(self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn is_success(status: u32) -> bool {
    (200..300).contains(&status)
}

fn new_easy(url: &str, opts: &HttpOptions) -> Result<curl::easy::Easy, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t)?;
    }
    if let Some(t) = opts.timeout {
        easy.timeout(t)?;
    }
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }
    Ok(easy)
}

/// GETs `url` and returns its status and body. The status is not checked here.
pub fn get_page(url: &str, opts: &HttpOptions) -> Result<PageResponse, FetchError> {
    let mut body = Vec::new();
    let mut easy = new_easy(url, opts).map_err(|e| FetchError::network(url, e))?;
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(|e| FetchError::network(url, e))?;
        transfer.perform().map_err(|e| FetchError::network(url, e))?;
    }
    let status = easy
        .response_code()
        .map_err(|e| FetchError::network(url, e))?;
    Ok(PageResponse { status, body })
}

/// Streams the body of `url` into `writer` and returns the number of bytes written.
///
/// A non-2xx final status is an `HttpStatus` error. Body bytes received before
/// the status is known may already have been written, so the caller owns cleanup.
/// A failing `writer` aborts the transfer and is reported as `Filesystem` at `path`.
pub fn download_to<W: Write>(
    url: &str,
    writer: &mut W,
    path: &Path,
    opts: &HttpOptions,
) -> Result<u64, FetchError> {
    let mut written: u64 = 0;
    let mut write_err: Option<io::Error> = None;
    let mut easy = new_easy(url, opts).map_err(|e| FetchError::network(url, e))?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match writer.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    tracing::warn!("write to {} failed: {}", path.display(), e);
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(|e| FetchError::network(url, e))?;
        transfer.perform()
    };

    if let Some(e) = write_err {
        return Err(FetchError::filesystem(path, e));
    }
    performed.map_err(|e| FetchError::network(url, e))?;

    let status = easy
        .response_code()
        .map_err(|e| FetchError::network(url, e))?;
    if !is_success(status) {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }
    writer.flush().map_err(|e| FetchError::filesystem(path, e))?;
    Ok(written)
}
