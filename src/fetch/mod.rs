//! Outbound HTTP plumbing shared by the dataset loader and the encyclopedia
//! client.

mod agent;
mod basic;
mod client;

pub use agent::UserAgent;
pub use basic::BasicClient;
pub use client::HttpClient;

use crate::error::FetchError;
use tracing::debug;

/// Issues a GET for `url` and returns the response body.
///
/// # Errors
///
/// Fails with [`FetchError`] when the URL does not parse, the connection or
/// TLS handshake fails, or the server answers with a non-success status.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>, FetchError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let bytes = resp.bytes().await?.to_vec();
    debug!(url, bytes = bytes.len(), "Response body received");
    Ok(bytes)
}

/// Loads raw bytes from a local path, or over HTTPS when `source` is a URL.
#[tracing::instrument(skip(client))]
pub async fn read_source<C: HttpClient>(client: &C, source: &str) -> Result<Vec<u8>, FetchError> {
    if is_remote(source) {
        fetch_bytes(client, source).await
    } else {
        std::fs::read(source).map_err(|source_err| FetchError::Io {
            path: source.to_string(),
            source: source_err,
        })
    }
}

/// Returns `true` when `source` names a remote resource rather than a file.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("https://") || source.starts_with("http://")
}
