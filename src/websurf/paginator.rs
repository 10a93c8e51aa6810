//! Viewport pagination.
//!
//! Splits a document's normalized text into an ordered list of pages so a
//! caller can read it incrementally. The pages exactly partition the text:
//! no gaps, no overlaps, and concatenating the page slices in order
//! reproduces the original string byte for byte. The page size is counted
//! in characters; the stored bounds are byte offsets that always fall on
//! UTF-8 character boundaries, so each page can be sliced directly out of
//! the text.
//!
//! Boundary rule: a page boundary never falls inside a word. When the
//! character limit lands mid-word the boundary is pushed forward to the
//! next whitespace, unless the word itself is longer than a whole page, in
//! which case the cut is made exactly at the size limit.
//!
//! # Examples
//!
//! ```rust
//! use websurf::{paginate, PageBounds};
//!
//! let pages = paginate("hello world", 5);
//! assert_eq!(pages, vec![
//!     PageBounds { start: 0, end: 5 },
//!     PageBounds { start: 5, end: 11 },
//! ]);
//! ```

/// One viewport page: a half-open byte range into the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl PageBounds {
    /// Slice this page out of the text it was computed for.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Compute the ordered viewport pages for `text`.
///
/// Empty text yields exactly one empty page `(0, 0)`; the final page's
/// end always equals `text.len()`. A `page_size` of zero is treated as
/// one character.
pub fn paginate(text: &str, page_size: usize) -> Vec<PageBounds> {
    if text.is_empty() {
        return vec![PageBounds { start: 0, end: 0 }];
    }
    let size = page_size.max(1);
    let mut pages = Vec::new();
    let mut start = 0;
    while start < text.len() {
        let end = page_end(text, start, size);
        pages.push(PageBounds { start, end });
        start = end;
    }
    pages
}

/// Byte offset at which the page starting at `start` ends.
fn page_end(text: &str, start: usize, size: usize) -> usize {
    let limit = advance_chars(text, start, size);
    if limit == text.len() || at_word_break(text, limit) {
        return limit;
    }
    // The limit fell inside a word. A word that fits on a page moves the
    // boundary forward to keep it whole; a word longer than a whole page
    // is cut exactly at the limit.
    match last_word_start(&text[start..limit]) {
        None => limit,
        Some(rel) => {
            let word_start = start + rel;
            let word_end = text[limit..]
                .find(char::is_whitespace)
                .map(|i| limit + i)
                .unwrap_or_else(|| text.len());
            if text[word_start..word_end].chars().count() > size {
                limit
            } else {
                word_end
            }
        }
    }
}

/// Byte offset after walking `count` characters forward from `start`.
fn advance_chars(text: &str, start: usize, count: usize) -> usize {
    let mut taken = 0;
    for (i, _) in text[start..].char_indices() {
        if taken == count {
            return start + i;
        }
        taken += 1;
    }
    text.len()
}

/// True when the character on either side of `pos` is whitespace.
fn at_word_break(text: &str, pos: usize) -> bool {
    let next_ws = text[pos..]
        .chars()
        .next()
        .map(char::is_whitespace)
        .unwrap_or(true);
    let prev_ws = text[..pos]
        .chars()
        .next_back()
        .map(char::is_whitespace)
        .unwrap_or(true);
    next_ws || prev_ws
}

/// Byte offset (relative to `slice`) where its last word begins, or
/// `None` when the slice is one unbroken token.
fn last_word_start(slice: &str) -> Option<usize> {
    let mut last_ws_end = None;
    for (i, c) in slice.char_indices() {
        if c.is_whitespace() {
            last_ws_end = Some(i + c.len_utf8());
        }
    }
    last_ws_end
}
