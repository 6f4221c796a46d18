//! Error types for data loading and encyclopedia lookups.

use thiserror::Error;

/// Startup data retrieval failure. Fatal: the tool cannot serve any view
/// without its dataset.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid dataset url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}

/// Encyclopedia query failure. Always recovered into a user-visible message.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("no page found for '{0}'")]
    NotFound(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("encyclopedia returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected response: {0}")]
    Decode(String),
}
