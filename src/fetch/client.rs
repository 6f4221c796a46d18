use async_trait::async_trait;
use reqwest::{Request, Response};

/// Transport seam for every outbound request the tool makes.
///
/// Implemented by [`BasicClient`](super::BasicClient) in production and by
/// canned in-process clients in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
