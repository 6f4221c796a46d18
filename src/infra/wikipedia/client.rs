use async_trait::async_trait;
use congress_aging::error::LookupError;
use congress_aging::fetch::{BasicClient, HttpClient, UserAgent};
use reqwest::{StatusCode, Url};
use serde_json::Value;

use crate::services::encyclopedia::{Encyclopedia, PageSummary};

/// REST endpoint returning a page's lead-section summary.
pub const SUMMARY_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
const ARTICLE_BASE: &str = "https://en.wikipedia.org/wiki/";

pub struct WikipediaClient<C> {
    http: UserAgent<C>,
    base_url: String,
}

impl WikipediaClient<BasicClient> {
    pub fn new(user_agent: &str) -> reqwest::Result<Self> {
        Ok(Self::with_client(BasicClient::new()?, user_agent, SUMMARY_ENDPOINT))
    }
}

impl<C: HttpClient> WikipediaClient<C> {
    pub fn with_client(inner: C, user_agent: &str, base_url: &str) -> Self {
        Self {
            http: UserAgent::new(inner, user_agent),
            base_url: base_url.to_string(),
        }
    }

    /// Summary URL for `title`, with spaces turned into underscores and the
    /// rest percent-encoded as a single path segment.
    fn summary_url(&self, title: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::Decode(format!("bad endpoint '{}': {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::Decode(format!("bad endpoint '{}'", self.base_url)))?
            .pop_if_empty()
            .push(&title.replace(' ', "_"));
        Ok(url)
    }
}

#[async_trait]
impl<C: HttpClient> Encyclopedia for WikipediaClient<C> {
    async fn page(&self, title: &str) -> Result<PageSummary, LookupError> {
        let url = self.summary_url(title)?;
        let req = reqwest::Request::new(reqwest::Method::GET, url);

        let response = self.http.execute(req).await?;
        match response.status() {
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound(title.to_string())),
            status if !status.is_success() => return Err(LookupError::Status(status)),
            _ => {}
        }

        // Parse as generic JSON to extract only the fields we need
        let json: Value = response.json().await?;
        parse_summary(title, &json)
    }
}

/// Extracts a [`PageSummary`] from a REST summary response body.
fn parse_summary(requested: &str, json: &Value) -> Result<PageSummary, LookupError> {
    let extract = json["extract"]
        .as_str()
        .ok_or_else(|| LookupError::Decode("summary response has no extract".to_string()))?;
    if extract.trim().is_empty() {
        return Err(LookupError::NotFound(requested.to_string()));
    }

    let title = json["title"].as_str().unwrap_or(requested).to_string();
    let url = json["content_urls"]["desktop"]["page"]
        .as_str()
        .map(String::from)
        .unwrap_or_else(|| format!("{ARTICLE_BASE}{}", title.replace(' ', "_")));

    Ok(PageSummary {
        title,
        extract: extract.to_string(),
        url,
    })
}
