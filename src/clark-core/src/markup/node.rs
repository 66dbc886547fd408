//! Markup render tree.
//!
//! The engine's output: a list of [`Block`]s, each holding [`Inline`]
//! nodes. The presentation layer maps these 1:1 onto terminal primitives;
//! no styling decision lives here beyond the header-row semantics of
//! [`MarkupTable`].

use serde::{Deserialize, Serialize};

/// One inline node within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// Plain text run.
    Text(String),
    /// Bold span (`**text**`), wrapping its parsed children.
    Bold(Vec<Inline>),
    /// Inline code span (`` `text` ``). Content is literal.
    Code(String),
    /// Fenced code block (```` ```text``` ````). Content is trimmed and literal.
    CodeBlock(String),
    /// Link embed (`(display)/%^url^%/`), with the URL already normalized.
    Link { text: String, url: String },
}

impl Inline {
    /// Recovers the literal text carried by this node and its children.
    ///
    /// Link nodes contribute their display text only.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(s) | Inline::Code(s) | Inline::CodeBlock(s) => s.clone(),
            Inline::Bold(children) => children.iter().map(Inline::plain_text).collect(),
            Inline::Link { text, .. } => text.clone(),
        }
    }
}

/// Collects the literal text of a whole inline sequence.
#[must_use]
pub fn plain_text(nodes: &[Inline]) -> String {
    nodes.iter().map(Inline::plain_text).collect()
}

/// One block-level fragment of a rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// Ordinary text span between other constructs.
    Paragraph(Vec<Inline>),
    /// Unordered list; each entry is one item's inline content.
    BulletList(Vec<Vec<Inline>>),
    /// A comparison table.
    Table(MarkupTable),
}

/// A dense table built from a table region's matched cells.
///
/// `rows[0]` is the header row; addresses never supplied render as empty
/// cells. A region whose matched cells all sit at row 0 produces a table
/// with no rows, which renders as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupTable {
    /// `rows[r][c]` is the parsed inline content of row `r + 1`, column `c + 1`.
    pub rows: Vec<Vec<Vec<Inline>>>,
}

impl MarkupTable {
    /// Returns true if the table has nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows, header included.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

/// Normalizes a captured link URL.
///
/// URLs already carrying an `http://` or `https://` scheme pass through
/// verbatim; anything else gets `https://` prepended.
#[must_use]
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_prepends_https_when_schemeless() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
    }

    #[test]
    fn normalize_keeps_existing_schemes() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn plain_text_flattens_nested_nodes() {
        let nodes = vec![
            Inline::Text("a ".into()),
            Inline::Bold(vec![
                Inline::Text("b ".into()),
                Inline::Link {
                    text: "c".into(),
                    url: "https://c.example".into(),
                },
            ]),
            Inline::Code("d".into()),
        ];
        assert_eq!(plain_text(&nodes), "a b cd");
    }

    #[test]
    fn node_serde_round_trip() {
        let block = Block::BulletList(vec![
            vec![Inline::Text("one".into())],
            vec![Inline::Bold(vec![Inline::Text("two".into())])],
        ]);
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(block, back);
    }
}
