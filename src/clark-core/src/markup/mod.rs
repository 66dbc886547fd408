//! # Clark Markup Engine
//!
//! Parses the assistant's constrained inline markup into a tree of
//! presentational blocks. One pass, purely functional: the same content
//! string always yields the same tree, nothing is cached, and no input
//! can make the parser fail.
//!
//! ## Pipeline
//!
//! ```text
//! content ──► split_regions ──► Table ──► CellGrid ──► parse_inline (per cell)
//!                         └───► Plain ──► split_bullet_blocks
//!                                           ├─► Bullets ──► split_bullet_items ──► parse_inline
//!                                           └─► Text ─────────────────────────► parse_inline
//! ```
//!
//! Table and bullet syntaxes are mutually exclusive by producer contract,
//! but the engine tolerates both in one message: tables split first, and
//! bullet markers are honored in whatever plain regions remain.

pub mod inline;
pub mod list;
pub mod node;
pub mod table;

pub use inline::parse_inline;
pub use list::{PlainPart, split_bullet_blocks, split_bullet_items};
pub use node::{Block, Inline, MarkupTable, normalize_url, plain_text};
pub use table::{CellGrid, Region, split_regions};

use tracing::debug;

/// Parses one raw message content string into presentational blocks.
///
/// This is the engine's sole entry point for message content. It is total
/// over all string inputs; malformed markup degrades to literal text and
/// the empty string yields no blocks.
#[must_use]
pub fn parse_message(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();

    for region in split_regions(content) {
        match region {
            Region::Table(inner) => {
                // A region with no valid cell is consumed and dropped.
                if let Some(grid) = CellGrid::parse(inner) {
                    blocks.push(Block::Table(grid.into_table()));
                }
            }
            Region::Plain(text) => parse_plain_region(text, &mut blocks),
        }
    }

    debug!(blocks = blocks.len(), "parsed message content");
    blocks
}

/// Parses one plain region into paragraphs and bullet lists.
fn parse_plain_region(region: &str, blocks: &mut Vec<Block>) {
    for part in split_bullet_blocks(region) {
        match part {
            PlainPart::Text(text) => {
                blocks.push(Block::Paragraph(parse_inline(text)));
            }
            PlainPart::Bullets(inner) => {
                let items = split_bullet_items(inner)
                    .into_iter()
                    .map(parse_inline)
                    .collect();
                blocks.push(Block::BulletList(items));
            }
        }
    }
}
