//! In-memory representation of a fetched resource.

use chrono::{DateTime, Local};

/// Content classification assigned while fetching.
///
/// Each kind maps to one dedicated conversion step in the fetcher, so the
/// set is closed on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Structural HTML converted to Markdown-like text
    Html,
    /// Decoded bytes passed through as-is
    PlainText,
    /// Text extracted from a PDF
    Pdf,
    /// Image or other non-text binary persisted to disk
    Image,
    /// Rendered hits from a search provider
    SearchResults,
}

/// A fetched resource, normalized to text.
#[derive(Debug, Clone)]
pub struct Document {
    /// The locator this document was fetched from
    pub locator: String,
    /// Resolved title, when the resource carries one
    pub title: Option<String>,
    /// Normalized full text
    pub text: String,
    /// Content classification
    pub kind: DocumentKind,
    /// When the resource was retrieved
    pub fetched_at: DateTime<Local>,
}

impl Document {
    pub fn new(
        locator: impl Into<String>,
        kind: DocumentKind,
        title: Option<String>,
        text: String,
    ) -> Self {
        Self {
            locator: locator.into(),
            title,
            text,
            kind,
            fetched_at: Local::now(),
        }
    }

    /// The blank document every session starts on.
    pub fn empty() -> Self {
        Self::new("about:blank", DocumentKind::PlainText, None, String::new())
    }
}
