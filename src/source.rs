use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

const YOUTUBE_ORIGIN: &str = "https://www.youtube.com";

/// One video card as rendered on a results page: the watch URL and the raw
/// metadata text that carries the displayed view count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCard {
    pub url: String,
    pub view_text: String,
}

impl VideoCard {
    pub fn new(url: impl Into<String>, view_text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            view_text: view_text.into(),
        }
    }
}

/// Failures raised by a page-driving implementation. The library only
/// propagates these; retries and recovery belong to the embedding
/// application that owns the browser.
#[derive(Error, Debug, Clone)]
pub enum SourceError {
    #[error("page interaction failed: {0}")]
    Page(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("search results did not load: {0}")]
    ResultsUnavailable(String),
}

/// Capability boundary to the browser-automation collaborator.
///
/// `visible_cards` reads the (url, view text) pairs currently rendered on
/// the page; `scroll` triggers one scroll step so the page loads more
/// results. The collection loop calls them strictly in alternation. Tests
/// implement the trait with scripted batches; production implementations
/// wrap a real page driver.
#[allow(async_fn_in_trait)] // internal seam for dependency injection in tests
pub trait CardSource {
    async fn visible_cards(&mut self) -> Result<Vec<VideoCard>, SourceError>;
    async fn scroll(&mut self) -> Result<(), SourceError>;
}

/// Build the results-page URL for a search query, percent-encoding the
/// query string.
pub fn search_url(query: &str) -> Url {
    Url::parse_with_params(
        &format!("{YOUTUBE_ORIGIN}/results"),
        &[("search_query", query.trim())],
    )
    .expect("youtube origin is a valid base URL")
}

/// Resolve a card's href against the YouTube origin. Result cards usually
/// carry relative `/watch?v=…` hrefs; absolute URLs pass through unchanged.
/// Deduplication keys on the absolute form.
pub fn absolutize(href: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }
    let base = Url::parse(YOUTUBE_ORIGIN).expect("youtube origin is a valid base URL");
    base.join(href).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url("rust async traits");
        assert_eq!(
            url.as_str(),
            "https://www.youtube.com/results?search_query=rust+async+traits"
        );
    }

    #[test]
    fn test_search_url_trims_query() {
        let url = search_url("  cats  ");
        assert_eq!(
            url.as_str(),
            "https://www.youtube.com/results?search_query=cats"
        );
    }

    #[test]
    fn test_absolutize_relative_href() {
        assert_eq!(
            absolutize("/watch?v=abc123").as_deref(),
            Some("https://www.youtube.com/watch?v=abc123")
        );
    }

    #[test]
    fn test_absolutize_keeps_absolute_href() {
        assert_eq!(
            absolutize("https://www.youtube.com/watch?v=xyz").as_deref(),
            Some("https://www.youtube.com/watch?v=xyz")
        );
    }

    #[test]
    fn test_absolutize_empty_href() {
        assert_eq!(absolutize(""), None);
    }
}
