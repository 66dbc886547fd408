//! Inline text rendering.
//!
//! The leaf-level renderer applied to every piece of plain text the block
//! splitters produce (table cells, bullet items, ordinary spans). Four
//! stages run in fixed precedence, each operating only on the non-code
//! output of the previous one:
//!
//! 1. fenced code (```` ``` ````), 2. inline code (`` ` ``),
//! 3. bold (`**`), 4. link embeds (`(display)/%^url^%/`).
//!
//! Stages 1-3 classify by alternating split position: odd-index segments
//! become code/bold, even-index segments fall through. An odd number of
//! delimiter occurrences therefore misclassifies the trailing segment;
//! that is a documented property of the format and is preserved as is.

use super::node::{Inline, normalize_url};

/// Parses one leaf text string into an ordered sequence of inline nodes.
///
/// Total over all inputs: unmatched delimiters fall through to more
/// literal interpretations, and the empty string yields no nodes.
#[must_use]
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    for (i, segment) in text.split("```").enumerate() {
        if i % 2 == 1 {
            // Code block content is literal; no further inline processing.
            nodes.push(Inline::CodeBlock(segment.trim().to_string()));
        } else {
            parse_code_spans(segment, &mut nodes);
        }
    }
    nodes
}

/// Stage 2: inline code spans on a non-code-block segment.
fn parse_code_spans(text: &str, nodes: &mut Vec<Inline>) {
    for (i, segment) in text.split('`').enumerate() {
        if i % 2 == 1 {
            nodes.push(Inline::Code(segment.to_string()));
        } else {
            parse_bold(segment, nodes);
        }
    }
}

/// Stage 3: bold spans on a non-code segment.
fn parse_bold(text: &str, nodes: &mut Vec<Inline>) {
    for (i, segment) in text.split("**").enumerate() {
        if i % 2 == 1 {
            let mut children = Vec::new();
            parse_links(segment, &mut children);
            nodes.push(Inline::Bold(children));
        } else {
            parse_links(segment, nodes);
        }
    }
}

/// Stage 4: link embeds on a bold or plain segment.
///
/// Scans left to right for non-overlapping `(display)/%^url^%/` matches;
/// text between and around matches becomes plain text nodes. Captures are
/// lazy and may not span line breaks.
fn parse_links(text: &str, nodes: &mut Vec<Inline>) {
    let mut cursor = 0;
    let mut search = 0;

    while let Some(offset) = text[search..].find('(') {
        let open = search + offset;
        match match_embed(text, open) {
            Some((display, url, end)) => {
                if open > cursor {
                    nodes.push(Inline::Text(text[cursor..open].to_string()));
                }
                nodes.push(Inline::Link {
                    text: display.to_string(),
                    url: normalize_url(url),
                });
                cursor = end;
                search = end;
            }
            None => {
                search = open + 1;
            }
        }
    }

    if cursor < text.len() {
        nodes.push(Inline::Text(text[cursor..].to_string()));
    }
}

/// Attempts to match one link embed starting at the `(` at `open`.
///
/// Returns the display text, raw URL, and the byte offset just past the
/// closing `^%/`. The display capture grows past a failed URL capture to
/// the next `)/%^` on the same line before the whole candidate is given
/// up, mirroring lazy-quantifier backtracking.
fn match_embed(text: &str, open: usize) -> Option<(&str, &str, usize)> {
    let mut search = open + 1;
    loop {
        let close = search + text[search..].find(")/%^")?;
        if has_line_break(&text[open + 1..close]) {
            // The display capture cannot cross a line break, and neither
            // can any longer candidate.
            return None;
        }

        let url_start = close + 4;
        if let Some(offset) = text[url_start..].find("^%/") {
            let url_end = url_start + offset;
            if !has_line_break(&text[url_start..url_end]) {
                return Some((&text[open + 1..close], &text[url_start..url_end], url_end + 3));
            }
        }

        // URL capture failed at this close marker; retry with a longer
        // display capture.
        search = close + 1;
    }
}

fn has_line_break(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
}
