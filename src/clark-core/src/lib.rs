//! Clark markup engine and terminal presentation layer.
//!
//! The assistant writes responses in a constrained inline markup language
//! (not Markdown): `**bold**`, backtick code spans, triple-backtick code
//! blocks, `(display)/%^url^%/` link embeds, `#...#` bullet lists, and
//! `@&...&@` comparison tables. The [`markup`] module deterministically
//! converts one raw content string into a tree of presentational blocks;
//! the [`render`] module maps that tree onto ratatui lines.
//!
//! Parsing is pure and total: no input string produces an error, and
//! malformed markup degrades to literal text instead of being rejected.

pub mod markup;
pub mod render;
pub mod style;
