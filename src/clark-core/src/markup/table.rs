//! Table region splitting and cell grid extraction.
//!
//! A message partitions into alternating plain/table regions on lazy
//! `@&`...`&@` delimiter pairs. Inside a table region, cells are addressed
//! as `%R<row>$C<col> text`, sparse and in any order; the grid's
//! dimensions are the maxima of the addresses seen, and row 1 is always
//! the header row. A table region with no valid cell renders as nothing:
//! its markers and raw text are consumed and dropped.

use tracing::trace;

use super::inline::parse_inline;
use super::node::MarkupTable;

/// One contiguous slice of message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region<'a> {
    /// Content outside any table region.
    Plain(&'a str),
    /// The inner text of one `@&`...`&@` pair.
    Table(&'a str),
}

/// Splits content into alternating plain and table regions.
///
/// The output starts and ends with a plain region (possibly empty). An
/// opening `@&` without a closing `&@` stays literal text in the trailing
/// plain region. Table regions do not nest; an inner `@&` is ordinary
/// text consumed by cell matching.
#[must_use]
pub fn split_regions(content: &str) -> Vec<Region<'_>> {
    let mut regions = Vec::new();
    let mut rest = content;

    loop {
        let Some(open) = rest.find("@&") else {
            regions.push(Region::Plain(rest));
            break;
        };
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("&@") else {
            regions.push(Region::Plain(rest));
            break;
        };

        regions.push(Region::Plain(&rest[..open]));
        regions.push(Region::Table(&after_open[..close]));
        rest = &after_open[close + 2..];
    }

    regions
}

/// One matched cell, before dense expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCell {
    pub row: u32,
    pub col: u32,
    pub text: String,
}

/// The sparse cell set matched inside one table region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    /// Matched cells in source order. Later matches at the same address
    /// win during dense expansion.
    pub cells: Vec<RawCell>,
    /// Highest row address seen, independent of which rows are populated.
    pub max_row: u32,
    /// Highest column address seen.
    pub max_col: u32,
}

impl CellGrid {
    /// Extracts the cell grid from a table region's inner text.
    ///
    /// Returns `None` when no cell matches, in which case the whole
    /// region produces no output.
    #[must_use]
    pub fn parse(inner: &str) -> Option<Self> {
        let mut cells = Vec::new();
        let mut max_row = 0u32;
        let mut max_col = 0u32;

        let mut pos = 0;
        while let Some(offset) = inner[pos..].find('%') {
            let start = pos + offset;
            match match_cell(inner, start) {
                Some((cell, end)) => {
                    max_row = max_row.max(cell.row);
                    max_col = max_col.max(cell.col);
                    cells.push(cell);
                    pos = end;
                }
                None => {
                    pos = start + 1;
                }
            }
        }

        if cells.is_empty() {
            return None;
        }
        trace!(cells = cells.len(), max_row, max_col, "matched table cells");
        Some(Self {
            cells,
            max_row,
            max_col,
        })
    }

    /// Last-written text at an address, or `""` when unpopulated.
    #[must_use]
    pub fn text_at(&self, row: u32, col: u32) -> &str {
        self.cells
            .iter()
            .rev()
            .find(|c| c.row == row && c.col == col)
            .map_or("", |c| c.text.as_str())
    }

    /// Expands the sparse grid into a dense table.
    ///
    /// Every cell's text goes through the inline renderer; bullet-list
    /// markers inside a cell are not recognized and stay literal.
    #[must_use]
    pub fn into_table(self) -> MarkupTable {
        let rows = (1..=self.max_row)
            .map(|row| {
                (1..=self.max_col)
                    .map(|col| parse_inline(self.text_at(row, col)))
                    .collect()
            })
            .collect();
        MarkupTable { rows }
    }
}

/// Attempts to match `%R<digits>$C<digits><ws>text` at `start`.
///
/// The text run extends to the next `%` or end of input and is trimmed.
/// At least one whitespace character must follow the column digits, and
/// the capture itself needs at least one further character; a run of
/// nothing but one whitespace character fails, exactly as the original
/// pattern's mandatory-whitespace/non-empty-capture split does.
fn match_cell(inner: &str, start: usize) -> Option<(RawCell, usize)> {
    let bytes = inner.as_bytes();
    let mut i = start;

    if bytes.get(i) != Some(&b'%') {
        return None;
    }
    i += 1;
    if bytes.get(i) != Some(&b'R') {
        return None;
    }
    i += 1;
    let (row, next) = match_digits(bytes, i)?;
    i = next;
    if bytes.get(i) != Some(&b'$') {
        return None;
    }
    i += 1;
    if bytes.get(i) != Some(&b'C') {
        return None;
    }
    i += 1;
    let (col, next) = match_digits(bytes, i)?;
    i = next;

    // The run of non-'%' characters following the address.
    let run_end = inner[i..].find('%').map_or(inner.len(), |off| i + off);
    let run = &inner[i..run_end];

    let mut chars = run.chars();
    if !chars.next().is_some_and(char::is_whitespace) {
        return None;
    }
    if chars.next().is_none() {
        return None;
    }

    let cell = RawCell {
        row,
        col,
        text: run.trim().to_string(),
    };
    Some((cell, run_end))
}

/// Matches one or more ASCII digits, folding with saturating arithmetic.
fn match_digits(bytes: &[u8], start: usize) -> Option<(u32, usize)> {
    let mut i = start;
    let mut value = 0u32;
    while let Some(b @ b'0'..=b'9') = bytes.get(i).copied() {
        value = value
            .saturating_mul(10)
            .saturating_add(u32::from(b - b'0'));
        i += 1;
    }
    if i == start { None } else { Some((value, i)) }
}
