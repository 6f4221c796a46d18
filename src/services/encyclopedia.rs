//! Trait and message rendering for encyclopedia lookups of members.

use async_trait::async_trait;
use congress_aging::error::LookupError;
use congress_aging::model::display_name;
use tracing::{info, warn};

/// Heading of every rendered summary.
pub const SUMMARY_HEADING: &str = "### Wikipedia Summary:";
/// Shown when the page does not exist.
pub const NOT_FOUND_MESSAGE: &str = "No page found for this name.";
/// Shown when there is no name to look up.
pub const EMPTY_NAME_MESSAGE: &str = "Please select who you want to know.";
/// Longest summary excerpt rendered, in characters.
pub const SUMMARY_CHARS: usize = 500;

/// Summary of a single encyclopedia page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
    pub extract: String,
    /// Canonical link to the full article.
    pub url: String,
}

/// Abstraction over an encyclopedia provider (e.g., Wikipedia).
#[async_trait]
pub trait Encyclopedia: Send + Sync {
    /// Fetches the summary of the page titled `title`.
    ///
    /// Returns [`LookupError::NotFound`] when no such page exists.
    async fn page(&self, title: &str) -> Result<PageSummary, LookupError>;
}

/// Looks up a member by stored bioname (`"LAST, First"`) and renders the
/// result as markdown. Never fails: every [`LookupError`] becomes a message.
#[tracing::instrument(skip(encyclopedia))]
pub async fn summarize<E: Encyclopedia + ?Sized>(encyclopedia: &E, bioname: &str) -> String {
    let name = display_name(bioname);
    if name.is_empty() {
        return EMPTY_NAME_MESSAGE.to_string();
    }

    match encyclopedia.page(&name).await {
        Ok(page) => {
            info!(title = %page.title, "Encyclopedia page found");
            let excerpt: String = page.extract.chars().take(SUMMARY_CHARS).collect();
            format!(
                "{SUMMARY_HEADING}\n\n{name}\n\n{excerpt}\n\n[Read more on Wikipedia]({})",
                page.url
            )
        }
        Err(LookupError::NotFound(_)) => {
            info!("No encyclopedia page");
            format!("{SUMMARY_HEADING}\n\n{name}\n\n{NOT_FOUND_MESSAGE}")
        }
        Err(e) => {
            warn!(error = %e, "Encyclopedia lookup failed");
            format!("{SUMMARY_HEADING}\n\n{name}\n\nAn error occurred: {e}")
        }
    }
}
