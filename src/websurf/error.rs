//! Error types surfaced by the browser.

use std::error::Error;
use std::fmt;

/// Errors that can occur while visiting a locator.
///
/// A failed visit never mutates the session: the previously loaded
/// document and page position are left untouched. Nothing is retried
/// automatically; retry policy is a caller responsibility.
#[derive(Debug)]
pub enum BrowserError {
    /// Network or HTTP failure while retrieving a resource
    Fetch {
        /// The locator that was being visited
        locator: String,
        /// Underlying cause, rendered as text
        cause: String,
    },
    /// Fetched content could not be converted to text
    Decode(String),
    /// A required external capability is not configured
    Configuration(String),
    /// The locator matches no recognized grammar
    UnsupportedLocator(String),
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserError::Fetch { locator, cause } => {
                write!(f, "Failed to fetch '{}': {}", locator, cause)
            }
            BrowserError::Decode(msg) => write!(f, "Could not decode content: {}", msg),
            BrowserError::Configuration(msg) => write!(f, "Missing configuration: {}", msg),
            BrowserError::UnsupportedLocator(locator) => {
                write!(f, "Unsupported locator: '{}'", locator)
            }
        }
    }
}

impl Error for BrowserError {}
