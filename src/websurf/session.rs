//! Stateful browsing session: one document behind a sliding viewport.
//!
//! A [`TextBrowser`] owns exactly one [`Document`] at a time. Visiting a
//! new locator replaces it and resets the viewport to the first page;
//! there is no history stack and no back transition. The session holds no
//! locks and is not meant for concurrent callers — give each task its own
//! browser.
//!
//! # Examples
//!
//! ```rust,no_run
//! use websurf::TextBrowser;
//!
//! # async fn demo() -> Result<(), websurf::BrowserError> {
//! let mut browser = TextBrowser::new()
//!     .with_header("User-Agent", "websurf/0.1")
//!     .with_viewport_size(1024);
//!
//! let first_page = browser.visit("https://example.com/").await?;
//! println!("{}", first_page);
//!
//! browser.page_down();
//! println!("{}", browser.viewport());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::websurf::config::BrowserConfig;
use crate::websurf::document::Document;
use crate::websurf::error::BrowserError;
use crate::websurf::fetcher::Fetcher;
use crate::websurf::paginator::{paginate, PageBounds};
use crate::websurf::search::{BraveSearch, SearchProvider};

/// A paginated text-mode browser session.
pub struct TextBrowser {
    config: BrowserConfig,
    fetcher: Fetcher,
    document: Document,
    pages: Vec<PageBounds>,
    current_page: usize,
}

impl TextBrowser {
    /// Create a session with default configuration, positioned on an
    /// empty document.
    pub fn new() -> Self {
        Self::with_config(BrowserConfig::default())
    }

    /// Create a session from an explicit [`BrowserConfig`].
    pub fn with_config(config: BrowserConfig) -> Self {
        let fetcher = Fetcher::new(&config);
        let document = Document::empty();
        let pages = paginate(&document.text, config.viewport_size);
        Self {
            config,
            fetcher,
            document,
            pages,
            current_page: 0,
        }
    }

    /// Set the directory binary downloads are written to.
    pub fn with_downloads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.downloads_dir = Some(dir.into());
        self
    }

    /// Set the viewport page size in characters and re-paginate the
    /// current document.
    pub fn with_viewport_size(mut self, size: usize) -> Self {
        self.config.viewport_size = size.max(1);
        self.pages = paginate(&self.document.text, self.config.viewport_size);
        self.current_page = self.current_page.min(self.pages.len() - 1);
        self
    }

    /// Add a header sent with every outgoing HTTP request.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.config
            .request_headers
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the maximum response body size in bytes.
    pub fn with_max_response_size(mut self, bytes: usize) -> Self {
        self.config.max_response_size = bytes;
        self
    }

    /// Enable `search:` locators through the built-in Brave client.
    pub fn with_search_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.fetcher
            .set_search_provider(Arc::new(BraveSearch::new(key.clone())));
        self.config.search_api_key = Some(key);
        self
    }

    /// Enable `search:` locators through a custom provider.
    pub fn with_search_provider(mut self, provider: Arc<dyn SearchProvider>) -> Self {
        self.fetcher.set_search_provider(provider);
        self
    }

    /// Visit a locator, replacing the current document.
    ///
    /// On success the viewport is reset to the first page and its rendered
    /// text is returned. On error the session is left exactly as it was:
    /// previous document, previous page position.
    pub async fn visit(&mut self, locator: &str) -> Result<String, BrowserError> {
        let document = self.fetcher.fetch(&self.config, locator).await?;
        self.pages = paginate(&document.text, self.config.viewport_size);
        self.document = document;
        self.current_page = 0;
        Ok(self.viewport().to_string())
    }

    /// Move the viewport one page toward the end; stays put on the last
    /// page.
    pub fn page_down(&mut self) {
        self.current_page = (self.current_page + 1).min(self.pages.len() - 1);
    }

    /// Move the viewport one page toward the start; stays put on page
    /// zero.
    pub fn page_up(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }

    /// Text of the current viewport page.
    pub fn viewport(&self) -> &str {
        self.pages[self.current_page].slice(&self.document.text)
    }

    /// Full normalized text of the current document.
    pub fn page_content(&self) -> &str {
        &self.document.text
    }

    /// Title of the current document, when it has one.
    pub fn page_title(&self) -> Option<&str> {
        self.document.title.as_deref()
    }

    /// Locator of the current document.
    pub fn address(&self) -> &str {
        &self.document.locator
    }

    /// Ordered page bounds over the current document.
    pub fn viewport_pages(&self) -> &[PageBounds] {
        &self.pages
    }

    /// Index of the current viewport page.
    pub fn viewport_current_page(&self) -> usize {
        self.current_page
    }

    /// The current document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The session's configuration.
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }
}

impl Default for TextBrowser {
    fn default() -> Self {
        Self::new()
    }
}
