//! Web-search provider integration.
//!
//! The browser routes `search:` locators through a [`SearchProvider`].
//! The built-in implementation is [`BraveSearch`], a minimal client for
//! the Brave Search API web vertical; anything implementing the trait can
//! be installed instead via
//! [`TextBrowser::with_search_provider`](crate::TextBrowser::with_search_provider).

use async_trait::async_trait;
use serde::Deserialize;

use crate::websurf::error::BrowserError;

/// One ranked result returned by a search provider.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: Option<String>,
}

/// A pluggable web-search backend.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a query, returning hits in ranked order.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, BrowserError>;

    /// Short provider name used in logs.
    fn provider_name(&self) -> &str;
}

const BRAVE_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";

/// Client for the Brave Search API (web vertical).
pub struct BraveSearch {
    client: reqwest::Client,
    token: String,
}

impl BraveSearch {
    pub fn new(subscription_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: subscription_token,
        }
    }
}

#[async_trait]
impl SearchProvider for BraveSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, BrowserError> {
        let url = format!("{}?q={}", BRAVE_ENDPOINT, urlencoding::encode(query));
        let response = self
            .client
            .get(&url)
            .header("X-Subscription-Token", &self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BrowserError::Fetch {
                locator: format!("search: {}", query),
                cause: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrowserError::Fetch {
                locator: format!("search: {}", query),
                cause: format!("HTTP status {}", status),
            });
        }

        let body: WebSearchResponse = response
            .json()
            .await
            .map_err(|e| BrowserError::Decode(format!("search response: {}", e)))?;

        let hits = body
            .web
            .map(|w| w.results)
            .unwrap_or_default()
            .into_iter()
            .map(|r| SearchHit {
                title: r.title,
                url: r.url,
                snippet: r.description,
            })
            .collect();
        Ok(hits)
    }

    fn provider_name(&self) -> &str {
        "brave"
    }
}

// Minimal slice of the Brave response shape; everything optional so an
// empty or partial payload still decodes.
#[derive(Debug, Deserialize)]
struct WebSearchResponse {
    #[serde(default)]
    web: Option<WebVertical>,
}

#[derive(Debug, Deserialize)]
struct WebVertical {
    #[serde(default)]
    results: Vec<WebResult>,
}

#[derive(Debug, Deserialize)]
struct WebResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    description: Option<String>,
}

/// Render ranked hits as the text of a search-results document.
pub(crate) fn render_search_results(query: &str, hits: &[SearchHit]) -> String {
    let mut out = format!(
        "A web search for '{}' found {} results:\n\n## Web Results\n",
        query,
        hits.len()
    );
    for (rank, hit) in hits.iter().enumerate() {
        out.push_str(&format!("\n{}. [{}]({})\n", rank + 1, hit.title, hit.url));
        if let Some(snippet) = &hit.snippet {
            out.push_str(snippet);
            out.push('\n');
        }
    }
    out.trim_end().to_string()
}
