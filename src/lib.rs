//! # WebSurf
//!
//! WebSurf is a paginated text-mode browser for LLM agents: it fetches a
//! resource, normalizes it to readable Markdown-like text, and exposes a
//! sliding viewport over that text so an agent can read long documents
//! one page at a time instead of swallowing them whole.
//!
//! The crate provides:
//!
//! * **Browsing sessions**: [`TextBrowser`] holds one document at a time
//!   with a clamped current-page pointer — `visit`, `page_down`,
//!   `page_up`, and pure queries for the viewport, title, and full text
//! * **Content normalization**: HTML is converted to Markdown-like text
//!   (scripts and styles stripped, title resolved), PDFs have their text
//!   extracted, plain text passes through, and images or other binaries
//!   are saved to a downloads directory with a one-line confirmation
//! * **Web search**: `search:<query>` locators route through a pluggable
//!   [`SearchProvider`]; [`BraveSearch`] ships as the built-in backend
//! * **Lossless pagination**: [`paginate`] partitions text into pages
//!   that break on word boundaries and always reassemble to the original
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use websurf::TextBrowser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     websurf::init_logger();
//!
//!     let mut browser = TextBrowser::new()
//!         .with_header("User-Agent", "websurf/0.1")
//!         .with_downloads_dir("downloads")
//!         .with_viewport_size(1024);
//!
//!     let first_page = browser.visit("https://example.com/").await?;
//!     println!("{}", first_page);
//!
//!     // Read the rest of the document incrementally.
//!     browser.page_down();
//!     println!("{}", browser.viewport());
//!     Ok(())
//! }
//! ```
//!
//! Visiting never retries and never partially mutates: a failed `visit`
//! leaves the previously loaded document and page position untouched.

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialise the global [`env_logger`] subscriber exactly once.
///
/// The helper is intentionally lightweight so that applications embedding
/// WebSurf can opt in to simple `RUST_LOG` driven diagnostics without
/// having to choose a specific logging backend upfront.
///
/// ```rust
/// websurf::init_logger();
/// log::info!("Logger is ready");
/// ```
pub fn init_logger() {
    INIT_LOGGER.call_once(|| {
        env_logger::init();
    });
}

// Import the top-level `websurf` module.
pub mod websurf;

// Re-exporting key items for easier external access.
pub use crate::websurf::config::BrowserConfig;
pub use crate::websurf::document::{Document, DocumentKind};
pub use crate::websurf::error::BrowserError;
pub use crate::websurf::paginator::{paginate, PageBounds};
pub use crate::websurf::search::{BraveSearch, SearchHit, SearchProvider};
pub use crate::websurf::session::TextBrowser;
