use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, USER_AGENT};

/// An [`HttpClient`] wrapper that stamps every request with a `User-Agent`.
///
/// Wikimedia rejects anonymous clients, so the encyclopedia client always
/// goes through this wrapper. A value that is not a valid header is dropped
/// and the inner client's default agent is used instead.
pub struct UserAgent<C> {
    pub inner: C,
    pub agent: String,
}

impl<C> UserAgent<C> {
    pub fn new(inner: C, agent: impl Into<String>) -> Self {
        Self {
            inner,
            agent: agent.into(),
        }
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for UserAgent<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        if let Ok(value) = HeaderValue::from_str(&self.agent) {
            req.headers_mut().insert(USER_AGENT, value);
        }
        self.inner.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::BasicClient;
    use std::sync::Mutex;

    struct Recorder {
        seen: Mutex<Option<String>>,
        inner: BasicClient,
    }

    #[async_trait]
    impl HttpClient for Recorder {
        async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            *self.seen.lock().unwrap() = req
                .headers()
                .get(USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            self.inner.execute(req).await
        }
    }

    #[tokio::test]
    async fn test_user_agent_header_is_injected() {
        let client = UserAgent::new(
            Recorder {
                seen: Mutex::new(None),
                inner: BasicClient::new().unwrap(),
            },
            "congress-aging-test/1.0",
        );

        // Plain http is refused by the https-only inner client before any
        // connection is attempted.
        let req = reqwest::Request::new(
            reqwest::Method::GET,
            "http://localhost/".parse().unwrap(),
        );
        assert!(client.execute(req).await.is_err());

        let seen = client.inner.seen.lock().unwrap().clone();
        assert_eq!(seen.as_deref(), Some("congress-aging-test/1.0"));
    }
}
