use super::client::HttpClient;
use async_trait::async_trait;

/// Plain reqwest client. Certificates are validated against the platform
/// root store and plain `http://` is refused.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    /// # Errors
    ///
    /// Fails when the TLS backend cannot be initialised.
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().https_only(true).build()?;
        Ok(Self(client))
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_http_is_refused() {
        let client = BasicClient::new().unwrap();
        let req = reqwest::Request::new(reqwest::Method::GET, "http://localhost/".parse().unwrap());
        assert!(client.execute(req).await.is_err());
    }
}
