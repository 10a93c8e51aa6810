//! Configuration for the text browser.
//!
//! Provides the [`BrowserConfig`] struct consumed by
//! [`TextBrowser::with_config`](crate::TextBrowser::with_config). Users
//! construct this manually — no config-file parsing dependencies are
//! required. Every field can also be set through the browser's chainable
//! `with_*` methods.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use websurf::BrowserConfig;
//!
//! // Use the defaults
//! let config = BrowserConfig::default();
//! assert_eq!(config.viewport_size, 8192);
//!
//! // Or spell everything out
//! let config = BrowserConfig {
//!     request_timeout: Duration::from_secs(10),
//!     ..BrowserConfig::default()
//! };
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Default viewport page size, in characters.
const DEFAULT_VIEWPORT_SIZE: usize = 8 * 1024;

/// Construction-time options for a browser session.
#[derive(Clone, Debug)]
pub struct BrowserConfig {
    /// Directory where image and other binary downloads are written.
    /// Visiting binary content with this unset is a configuration error.
    pub downloads_dir: Option<PathBuf>,
    /// Viewport page size, in characters.
    pub viewport_size: usize,
    /// Headers applied to every outgoing HTTP request.
    pub request_headers: HashMap<String, String>,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Maximum response body size in bytes; larger bodies abort the fetch.
    pub max_response_size: usize,
    /// Search provider credential. The `search:` locator form is disabled
    /// without it (unless a custom provider is installed).
    pub search_api_key: Option<String>,
}

impl Default for BrowserConfig {
    /// Defaults: no downloads directory, 8192-character viewport, no extra
    /// headers, 30-second timeout, 10 MiB response cap, no search key.
    fn default() -> Self {
        Self {
            downloads_dir: None,
            viewport_size: DEFAULT_VIEWPORT_SIZE,
            request_headers: HashMap::new(),
            request_timeout: Duration::from_secs(30),
            max_response_size: 10 * 1024 * 1024, // 10MB
            search_api_key: None,
        }
    }
}
