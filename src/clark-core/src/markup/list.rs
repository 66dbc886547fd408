//! Bullet list splitting.
//!
//! Within a plain region, lazy `#`...`#` pairs delimit bullet blocks; the
//! text between and around them stays ordinary. Inside a block, items are
//! separated by line breaks or `~` (the two are interchangeable), trimmed,
//! and empty pieces are dropped.

/// One part of a plain region after bullet-block splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainPart<'a> {
    /// Ordinary text between bullet blocks (may be empty).
    Text(&'a str),
    /// The inner text of one `#`...`#` pair.
    Bullets(&'a str),
}

/// Splits a plain region on `#`-delimited bullet blocks.
///
/// A region without a complete `#` pair comes back as a single text part;
/// a trailing unmatched `#` stays literal inside that text.
#[must_use]
pub fn split_bullet_blocks(region: &str) -> Vec<PlainPart<'_>> {
    let mut parts = Vec::new();
    let mut rest = region;

    loop {
        let Some(open) = rest.find('#') else {
            if !rest.is_empty() {
                parts.push(PlainPart::Text(rest));
            }
            break;
        };
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('#') else {
            if !rest.is_empty() {
                parts.push(PlainPart::Text(rest));
            }
            break;
        };

        if open > 0 {
            parts.push(PlainPart::Text(&rest[..open]));
        }
        parts.push(PlainPart::Bullets(&after_open[..close]));
        rest = &after_open[close + 1..];
    }

    parts
}

/// Splits a bullet block's inner text into trimmed, non-empty items.
#[must_use]
pub fn split_bullet_items(block: &str) -> Vec<&str> {
    block
        .split(['\n', '~'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}
