//! Resource fetching and content classification.
//!
//! Turns a locator string into a [`Document`]. Dispatch is a closed
//! classification step — every fetched payload is assigned one
//! [`ContentClass`] and handed to the matching conversion function, so
//! there is no open-ended type sniffing spread through the code.
//!
//! Downloads write the destination file through `tokio::fs::write`, which
//! closes the handle in every case; there is no atomic rename, so a
//! failed download may leave a truncated file behind.

use std::path::Path;
use std::sync::Arc;

use futures_util::StreamExt;
use sha2::{Digest, Sha256};

use crate::websurf::config::BrowserConfig;
use crate::websurf::document::{Document, DocumentKind};
use crate::websurf::error::BrowserError;
use crate::websurf::markdown;
use crate::websurf::search::{render_search_results, BraveSearch, SearchProvider};

const SEARCH_PREFIX: &str = "search:";

/// Classification of a fetched payload, keyed off the declared content
/// type with a byte-level fallback for servers that declare nothing.
enum ContentClass {
    Html,
    PlainText,
    Pdf,
    Binary,
}

pub(crate) struct Fetcher {
    client: reqwest::Client,
    search: Option<Arc<dyn SearchProvider>>,
}

impl Fetcher {
    pub(crate) fn new(config: &BrowserConfig) -> Self {
        let search = config
            .search_api_key
            .as_ref()
            .map(|key| Arc::new(BraveSearch::new(key.clone())) as Arc<dyn SearchProvider>);
        Self {
            client: reqwest::Client::new(),
            search,
        }
    }

    pub(crate) fn set_search_provider(&mut self, provider: Arc<dyn SearchProvider>) {
        self.search = Some(provider);
    }

    /// Fetch `locator` and normalize it to a [`Document`].
    pub(crate) async fn fetch(
        &self,
        config: &BrowserConfig,
        locator: &str,
    ) -> Result<Document, BrowserError> {
        if let Some(query) = locator.strip_prefix(SEARCH_PREFIX) {
            return self.fetch_search(locator, query.trim()).await;
        }
        if locator.starts_with("http://") || locator.starts_with("https://") {
            return self.fetch_http(config, locator).await;
        }
        if let Some(path) = locator.strip_prefix("file://") {
            return self.fetch_file(config, locator, Path::new(path)).await;
        }
        let path = Path::new(locator);
        if path.exists() {
            return self.fetch_file(config, locator, path).await;
        }
        Err(BrowserError::UnsupportedLocator(locator.to_string()))
    }

    async fn fetch_search(&self, locator: &str, query: &str) -> Result<Document, BrowserError> {
        let provider = self.search.as_ref().ok_or_else(|| {
            BrowserError::Configuration(
                "search locators require a search provider; set a search API key".to_string(),
            )
        })?;
        log::debug!("searching '{}' via {}", query, provider.provider_name());
        let hits = provider.search(query).await?;
        log::debug!("search '{}' returned {} hits", query, hits.len());
        Ok(Document::new(
            locator,
            DocumentKind::SearchResults,
            Some(format!("{} - Search", query)),
            render_search_results(query, &hits),
        ))
    }

    async fn fetch_http(
        &self,
        config: &BrowserConfig,
        locator: &str,
    ) -> Result<Document, BrowserError> {
        log::debug!("fetching '{}'", locator);
        let mut request = self.client.get(locator).timeout(config.request_timeout);
        for (name, value) in &config.request_headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let response = request.send().await.map_err(|e| BrowserError::Fetch {
            locator: locator.to_string(),
            cause: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrowserError::Fetch {
                locator: locator.to_string(),
                cause: format!("HTTP status {}", status),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let bytes = self.read_body(config, locator, response).await?;
        self.build_document(config, locator, content_type.as_deref(), bytes)
            .await
    }

    /// Stream the body, aborting as soon as it exceeds the configured cap
    /// so an oversized response is never fully buffered.
    async fn read_body(
        &self,
        config: &BrowserConfig,
        locator: &str,
        response: reqwest::Response,
    ) -> Result<Vec<u8>, BrowserError> {
        let mut stream = response.bytes_stream();
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| BrowserError::Fetch {
                locator: locator.to_string(),
                cause: format!("failed to read response body: {}", e),
            })?;
            if body.len() + chunk.len() > config.max_response_size {
                return Err(BrowserError::Fetch {
                    locator: locator.to_string(),
                    cause: format!(
                        "response body exceeds maximum size of {} bytes",
                        config.max_response_size
                    ),
                });
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }

    async fn fetch_file(
        &self,
        config: &BrowserConfig,
        locator: &str,
        path: &Path,
    ) -> Result<Document, BrowserError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| BrowserError::Fetch {
            locator: locator.to_string(),
            cause: e.to_string(),
        })?;
        self.build_document(config, locator, guess_content_type(path), bytes)
            .await
    }

    /// One conversion function per content class.
    async fn build_document(
        &self,
        config: &BrowserConfig,
        locator: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<Document, BrowserError> {
        match classify(content_type, &bytes) {
            ContentClass::Html => {
                let html = String::from_utf8_lossy(&bytes);
                let (title, text) = markdown::convert(&html);
                Ok(Document::new(locator, DocumentKind::Html, title, text))
            }
            ContentClass::PlainText => {
                let text = String::from_utf8(bytes).map_err(|_| {
                    BrowserError::Decode(format!("'{}' is not valid UTF-8 text", locator))
                })?;
                Ok(Document::new(locator, DocumentKind::PlainText, None, text))
            }
            ContentClass::Pdf => {
                let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                    BrowserError::Decode(format!("PDF extraction failed for '{}': {}", locator, e))
                })?;
                Ok(Document::new(locator, DocumentKind::Pdf, None, text))
            }
            ContentClass::Binary => self.save_download(config, locator, content_type, &bytes).await,
        }
    }

    /// Persist binary content under a content-derived filename and return
    /// the one-line confirmation document.
    async fn save_download(
        &self,
        config: &BrowserConfig,
        locator: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<Document, BrowserError> {
        let dir = config.downloads_dir.as_ref().ok_or_else(|| {
            BrowserError::Configuration(
                "binary content requires a downloads directory".to_string(),
            )
        })?;
        let path = dir.join(download_file_name(locator, content_type, bytes));
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| BrowserError::Fetch {
                locator: locator.to_string(),
                cause: format!("could not create downloads directory: {}", e),
            })?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| BrowserError::Fetch {
                locator: locator.to_string(),
                cause: format!("could not write '{}': {}", path.display(), e),
            })?;
        log::info!("downloaded '{}' to '{}'", locator, path.display());
        Ok(Document::new(
            locator,
            DocumentKind::Image,
            Some("Download complete".to_string()),
            format!("Downloaded '{}' to '{}'", locator, path.display()),
        ))
    }
}

fn classify(content_type: Option<&str>, bytes: &[u8]) -> ContentClass {
    let essence = content_type.map(|ct| {
        ct.split(';')
            .next()
            .unwrap_or(ct)
            .trim()
            .to_ascii_lowercase()
    });
    match essence.as_deref() {
        Some("text/html") | Some("application/xhtml+xml") => return ContentClass::Html,
        Some("application/pdf") => return ContentClass::Pdf,
        Some(ct) if ct.starts_with("text/") => return ContentClass::PlainText,
        Some(ct)
            if ct.starts_with("image/") || ct.starts_with("audio/") || ct.starts_with("video/") =>
        {
            return ContentClass::Binary
        }
        _ => {}
    }
    if bytes.starts_with(b"%PDF-") {
        return ContentClass::Pdf;
    }
    // No recognized structured type: UTF-8 passes through as plain text,
    // anything else is a binary download.
    if std::str::from_utf8(bytes).is_ok() {
        ContentClass::PlainText
    } else {
        ContentClass::Binary
    }
}

/// Content type inferred from a local file's extension.
fn guess_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "html" | "htm" => Some("text/html"),
        "pdf" => Some("application/pdf"),
        "txt" | "md" | "rst" | "csv" | "log" => Some("text/plain"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Filename derived from the downloaded bytes: a SHA-256 prefix plus the
/// best available extension, so identical content lands on one path.
fn download_file_name(locator: &str, content_type: Option<&str>, bytes: &[u8]) -> String {
    use std::fmt::Write as _;

    let digest = Sha256::digest(bytes);
    let mut name = String::with_capacity(20);
    for byte in digest.iter().take(8) {
        let _ = write!(name, "{:02x}", byte);
    }
    if let Some(ext) = extension_for(locator, content_type) {
        name.push('.');
        name.push_str(&ext);
    }
    name
}

fn extension_for(locator: &str, content_type: Option<&str>) -> Option<String> {
    if let Some(ct) = content_type {
        let essence = ct.split(';').next().unwrap_or(ct).trim();
        let known = match essence {
            "image/png" => Some("png"),
            "image/jpeg" => Some("jpg"),
            "image/gif" => Some("gif"),
            "image/webp" => Some("webp"),
            "image/svg+xml" => Some("svg"),
            "application/zip" => Some("zip"),
            "application/gzip" => Some("gz"),
            _ => None,
        };
        if let Some(ext) = known {
            return Some(ext.to_string());
        }
    }
    // Fall back to whatever extension the locator path carries.
    let trimmed = locator.split(|c| c == '?' || c == '#').next().unwrap_or(locator);
    Path::new(trimmed)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefers_the_declared_content_type() {
        assert!(matches!(
            classify(Some("text/html; charset=utf-8"), b"<html>"),
            ContentClass::Html
        ));
        assert!(matches!(
            classify(Some("application/pdf"), b"%PDF-1.7"),
            ContentClass::Pdf
        ));
        assert!(matches!(
            classify(Some("image/png"), b"\x89PNG"),
            ContentClass::Binary
        ));
        assert!(matches!(
            classify(Some("text/plain"), b"hello"),
            ContentClass::PlainText
        ));
    }

    #[test]
    fn classify_sniffs_when_nothing_is_declared() {
        assert!(matches!(classify(None, b"%PDF-1.4 junk"), ContentClass::Pdf));
        assert!(matches!(classify(None, b"just words"), ContentClass::PlainText));
        assert!(matches!(classify(None, &[0x00, 0xff, 0xfe]), ContentClass::Binary));
    }

    #[test]
    fn download_names_are_content_derived() {
        let a = download_file_name("https://example.com/cat.png", Some("image/png"), b"abc");
        let b = download_file_name("https://example.com/dog.png", Some("image/png"), b"abc");
        let c = download_file_name("https://example.com/cat.png", Some("image/png"), b"xyz");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.ends_with(".png"));
    }

    #[test]
    fn extension_falls_back_to_the_locator_path() {
        let name = download_file_name("https://example.com/archive.tar?dl=1", None, b"\x00\x01");
        assert!(name.ends_with(".tar"));
    }
}
