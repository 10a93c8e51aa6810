//! HTML to Markdown-like text conversion.
//!
//! Walks the parsed DOM and emits readable text: headings become `#`
//! prefixes, anchors become `[label](href)`, list items become dashes,
//! and script/style subtrees are dropped entirely. The goal is a faithful
//! plain-text reading of the page, not round-trippable Markdown.

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Convert an HTML document to `(title, text)`.
///
/// The title is the `<title>` element when present, otherwise the first
/// heading, otherwise `None`.
pub(crate) fn convert(html: &str) -> (Option<String>, String) {
    let dom = Html::parse_document(html);
    let title = extract_title(&dom);
    let mut out = String::new();
    render_children(dom.root_element(), &mut out, false);
    (title, tidy(&out))
}

fn extract_title(dom: &Html) -> Option<String> {
    let title = Selector::parse("title").expect("valid selector");
    if let Some(el) = dom.select(&title).next() {
        let text = collapse_whitespace(&el.text().collect::<String>());
        if !text.is_empty() {
            return Some(text);
        }
    }
    let headings = Selector::parse("h1,h2,h3,h4,h5,h6").expect("valid selector");
    dom.select(&headings)
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .find(|text| !text.is_empty())
}

fn render_children(element: ElementRef<'_>, out: &mut String, preformatted: bool) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                if preformatted {
                    out.push_str(text);
                } else {
                    push_inline_text(out, text);
                }
            }
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child) {
                    render_element(el, out, preformatted);
                }
            }
            _ => {}
        }
    }
}

fn render_element(el: ElementRef<'_>, out: &mut String, preformatted: bool) {
    let name = el.value().name();
    match name {
        "head" | "script" | "style" | "noscript" | "template" => {}
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = (name.as_bytes()[1] - b'0') as usize;
            ensure_blank_line(out);
            for _ in 0..level {
                out.push('#');
            }
            out.push(' ');
            render_children(el, out, false);
            ensure_blank_line(out);
        }
        "p" | "div" | "section" | "article" | "main" | "header" | "footer" | "aside"
        | "figure" | "blockquote" | "ul" | "ol" | "table" => {
            ensure_blank_line(out);
            render_children(el, out, preformatted);
            ensure_blank_line(out);
        }
        "li" => {
            end_line(out);
            out.push_str("- ");
            render_children(el, out, preformatted);
        }
        "br" => out.push('\n'),
        "hr" => {
            ensure_blank_line(out);
            out.push_str("---");
            ensure_blank_line(out);
        }
        "a" => {
            let before = out.len();
            render_children(el, out, preformatted);
            let href = el.value().attr("href").unwrap_or("");
            if out.len() > before
                && out.is_char_boundary(before)
                && !href.is_empty()
                && !href.starts_with('#')
                && !href.starts_with("javascript:")
            {
                let label = out.split_off(before);
                let label = label.trim();
                if !label.is_empty() {
                    out.push('[');
                    out.push_str(label);
                    out.push_str("](");
                    out.push_str(href);
                    out.push(')');
                }
            }
        }
        "strong" | "b" => {
            out.push_str("**");
            render_children(el, out, preformatted);
            out.push_str("**");
        }
        "em" | "i" => {
            out.push('*');
            render_children(el, out, preformatted);
            out.push('*');
        }
        "code" if !preformatted => {
            out.push('`');
            render_children(el, out, true);
            out.push('`');
        }
        "pre" => {
            ensure_blank_line(out);
            out.push_str("```\n");
            render_children(el, out, true);
            end_line(out);
            out.push_str("```");
            ensure_blank_line(out);
        }
        "tr" => {
            let mut cells = Vec::new();
            for child in el.children() {
                if let Some(cell) = ElementRef::wrap(child) {
                    let cell_name = cell.value().name();
                    if cell_name == "td" || cell_name == "th" {
                        let mut buf = String::new();
                        render_children(cell, &mut buf, preformatted);
                        cells.push(collapse_whitespace(&buf));
                    }
                }
            }
            end_line(out);
            out.push_str(&cells.join(" | "));
        }
        "img" => {
            if let Some(alt) = el.value().attr("alt") {
                push_inline_text(out, alt);
            }
        }
        _ => render_children(el, out, preformatted),
    }
}

/// Append inline text, collapsing whitespace runs to single spaces.
fn push_inline_text(out: &mut String, text: &str) {
    if text.trim().is_empty() {
        // Whitespace-only fragments still separate adjacent words.
        if !text.is_empty() && !out.is_empty() && !out.ends_with([' ', '\n']) {
            out.push(' ');
        }
        return;
    }
    let mut last_was_space = out.is_empty() || out.ends_with([' ', '\n']);
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
}

/// Terminate the current line, dropping trailing spaces first.
fn end_line(out: &mut String) {
    while out.ends_with(' ') || out.ends_with('\t') {
        out.pop();
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Terminate the current block with a blank line.
fn ensure_blank_line(out: &mut String) {
    while out.ends_with(' ') || out.ends_with('\t') {
        out.pop();
    }
    if out.is_empty() {
        return;
    }
    while !out.ends_with("\n\n") {
        out.push('\n');
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Final cleanup: trim line ends, cap blank runs at one line, trim edges.
fn tidy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim_matches('\n').to_string()
}
