//! Error type for a fetch run.
//!
//! Every variant aborts the run; nothing here is retried.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not complete (DNS, connection refused, reset, ...).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },
    /// Creating a directory or writing a file failed.
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl FetchError {
    pub(crate) fn network(url: &str, source: curl::Error) -> Self {
        FetchError::Network {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FetchError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// True for connection failures and bad HTTP statuses.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network { .. } | FetchError::HttpStatus { .. })
    }

    pub fn is_filesystem(&self) -> bool {
        matches!(self, FetchError::Filesystem { .. })
    }
}
