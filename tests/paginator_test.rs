//! Test suite for viewport pagination
//!
//! Tests cover:
//! - Lossless partition (concatenation reproduces the text)
//! - Contiguity of adjacent pages
//! - Word-boundary placement and the overlong-word exact cut
//! - Degenerate inputs (empty text, tiny text, multi-byte text)

use websurf::{paginate, PageBounds};

fn reassemble(text: &str, pages: &[PageBounds]) -> String {
    pages.iter().map(|p| &text[p.start..p.end]).collect()
}

#[test]
fn empty_text_yields_a_single_empty_page() {
    let pages = paginate("", 1024);
    assert_eq!(pages, vec![PageBounds { start: 0, end: 0 }]);
}

#[test]
fn short_text_is_a_single_page() {
    let pages = paginate("tiny", 1024);
    assert_eq!(pages, vec![PageBounds { start: 0, end: 4 }]);
}

#[test]
fn pages_partition_the_text_exactly() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(50);
    let pages = paginate(&text, 128);

    assert!(pages.len() > 1);
    assert_eq!(pages[0].start, 0);
    assert_eq!(pages.last().unwrap().end, text.len());
    for pair in pages.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    assert_eq!(reassemble(&text, &pages), text);
}

#[test]
fn boundaries_never_fall_inside_short_words() {
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu";
    let pages = paginate(text, 12);

    for page in &pages[..pages.len() - 1] {
        let before = text[..page.end].chars().next_back().unwrap();
        let after = text[page.end..].chars().next().unwrap();
        assert!(
            before.is_whitespace() || after.is_whitespace(),
            "boundary at byte {} splits a word",
            page.end
        );
    }
    assert_eq!(reassemble(text, &pages), text);
}

#[test]
fn two_words_split_on_the_word_boundary() {
    let pages = paginate("hello world", 5);
    assert_eq!(
        pages,
        vec![
            PageBounds { start: 0, end: 5 },
            PageBounds { start: 5, end: 11 },
        ]
    );
}

#[test]
fn overlong_words_are_cut_exactly_at_the_limit() {
    // Both words exceed a 3-character page, so every cut is exact.
    let text = "hello world";
    let pages = paginate(text, 3);
    assert_eq!(
        pages,
        vec![
            PageBounds { start: 0, end: 3 },
            PageBounds { start: 3, end: 6 },
            PageBounds { start: 6, end: 9 },
            PageBounds { start: 9, end: 11 },
        ]
    );
    assert_eq!(reassemble(text, &pages), text);
}

#[test]
fn a_single_unbroken_token_spans_exact_pages() {
    let text = "abcdefghij";
    let pages = paginate(text, 4);
    assert_eq!(
        pages,
        vec![
            PageBounds { start: 0, end: 4 },
            PageBounds { start: 4, end: 8 },
            PageBounds { start: 8, end: 10 },
        ]
    );
}

#[test]
fn a_word_that_fits_is_kept_whole_past_the_limit() {
    // The limit lands inside "world", which fits on a page, so the
    // boundary extends to the end of the word.
    let text = "a world";
    let pages = paginate(text, 5);
    assert_eq!(pages, vec![PageBounds { start: 0, end: 7 }]);
}

#[test]
fn multibyte_text_partitions_on_char_boundaries() {
    let text = "héllo wörld grüß dich ünd nöch ein paar Wörter";
    let pages = paginate(text, 6);

    assert_eq!(reassemble(text, &pages), text);
    for page in &pages {
        assert!(text.is_char_boundary(page.start));
        assert!(text.is_char_boundary(page.end));
    }
}

#[test]
fn zero_page_size_is_treated_as_one_character() {
    let text = "abc";
    let pages = paginate(text, 0);
    assert_eq!(pages.len(), 3);
    assert_eq!(reassemble(text, &pages), text);
}

#[test]
fn final_page_end_always_equals_text_length() {
    for size in [1, 2, 3, 7, 16, 1000] {
        let text = "some words of varying length spread across the line";
        let pages = paginate(text, size);
        assert_eq!(pages.last().unwrap().end, text.len(), "size {}", size);
    }
}
