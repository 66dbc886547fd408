//! Table painting.
//!
//! Renders a [`MarkupTable`] with full box-drawing borders. Row 1 is
//! always emphasized as the header row. Column widths derive from cell
//! content via unicode-width, shrink proportionally when the table would
//! exceed the available width, and over-long cells are truncated with an
//! ellipsis.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::markup::{MarkupTable, plain_text};

use super::theme::MarkupTheme;

/// Minimum column width (excluding borders)
const MIN_COLUMN_WIDTH: usize = 3;

/// Padding on each side of cell content
const CELL_PADDING: usize = 1;

/// Box-drawing characters for table borders.
mod border {
    pub const TOP_LEFT: char = '┌';
    pub const TOP_RIGHT: char = '┐';
    pub const BOTTOM_LEFT: char = '└';
    pub const BOTTOM_RIGHT: char = '┘';
    pub const HORIZONTAL: char = '─';
    pub const VERTICAL: char = '│';
    pub const CROSS: char = '┼';
    pub const T_DOWN: char = '┬';
    pub const T_UP: char = '┴';
    pub const T_RIGHT: char = '├';
    pub const T_LEFT: char = '┤';
}

/// Renders a table to lines.
///
/// An empty table (no rows or no columns) renders as nothing.
pub fn render_table(table: &MarkupTable, theme: &MarkupTheme, max_width: u16) -> Vec<Line<'static>> {
    if table.is_empty() || table.num_columns() == 0 {
        return Vec::new();
    }

    // Cells paint as plain text with row-level styling; widths come from
    // the flattened content.
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| plain_text(cell)).collect())
        .collect();

    let widths = column_widths(&cells, table.num_columns(), max_width);
    let border_style = Style::default().fg(theme.table_border);

    let mut lines = Vec::new();

    lines.push(horizontal_line(
        &widths,
        border::TOP_LEFT,
        border::T_DOWN,
        border::TOP_RIGHT,
        border_style,
    ));

    for (i, row) in cells.iter().enumerate() {
        let style = if i == 0 {
            theme.table_header
        } else {
            theme.table_cell
        };
        lines.push(content_row(row, &widths, style, border_style));

        // Separator under the header row only.
        if i == 0 && cells.len() > 1 {
            lines.push(horizontal_line(
                &widths,
                border::T_RIGHT,
                border::CROSS,
                border::T_LEFT,
                border_style,
            ));
        }
    }

    lines.push(horizontal_line(
        &widths,
        border::BOTTOM_LEFT,
        border::T_UP,
        border::BOTTOM_RIGHT,
        border_style,
    ));

    lines
}

/// Calculates column widths from content, fitting `max_width`.
fn column_widths(cells: &[Vec<String>], num_cols: usize, max_width: u16) -> Vec<usize> {
    let mut pref = vec![MIN_COLUMN_WIDTH; num_cols];
    for row in cells {
        for (i, cell) in row.iter().enumerate() {
            if i < num_cols {
                pref[i] = pref[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }
    }

    // Borders: one vertical per column plus one; padding on both sides of
    // every cell.
    let overhead = num_cols + 1 + 2 * CELL_PADDING * num_cols;
    let available = (max_width as usize).saturating_sub(overhead);

    let total_pref: usize = pref.iter().sum();
    if total_pref <= available {
        return pref;
    }

    let total_min = num_cols * MIN_COLUMN_WIDTH;
    if total_min >= available {
        return vec![MIN_COLUMN_WIDTH; num_cols];
    }

    // Shrink proportionally, never below the minimum.
    let extra = available - total_min;
    let pref_extra: usize = pref.iter().map(|p| p.saturating_sub(MIN_COLUMN_WIDTH)).sum();
    pref.iter()
        .map(|p| {
            let col_extra = p.saturating_sub(MIN_COLUMN_WIDTH);
            let allocated = if pref_extra > 0 {
                col_extra * extra / pref_extra
            } else {
                0
            };
            MIN_COLUMN_WIDTH + allocated
        })
        .collect()
}

/// Renders one horizontal border line.
fn horizontal_line(
    widths: &[usize],
    left: char,
    mid: char,
    right: char,
    border_style: Style,
) -> Line<'static> {
    let mut spans = vec![Span::styled(left.to_string(), border_style)];

    for (i, &width) in widths.iter().enumerate() {
        let segment: String = std::iter::repeat_n(border::HORIZONTAL, width + 2 * CELL_PADDING)
            .collect();
        spans.push(Span::styled(segment, border_style));
        if i < widths.len() - 1 {
            spans.push(Span::styled(mid.to_string(), border_style));
        }
    }

    spans.push(Span::styled(right.to_string(), border_style));
    Line::from(spans)
}

/// Renders one row of cells between vertical borders.
fn content_row(
    row: &[String],
    widths: &[usize],
    style: Style,
    border_style: Style,
) -> Line<'static> {
    let mut spans = vec![Span::styled(border::VERTICAL.to_string(), border_style)];

    for (i, &width) in widths.iter().enumerate() {
        let content = row.get(i).map_or("", String::as_str);
        let truncated = truncate_with_ellipsis(content, width);
        let aligned = pad_to_width(&truncated, width);

        spans.push(Span::styled(" ".repeat(CELL_PADDING), style));
        spans.push(Span::styled(aligned, style));
        spans.push(Span::styled(" ".repeat(CELL_PADDING), style));
        spans.push(Span::styled(border::VERTICAL.to_string(), border_style));
    }

    Line::from(spans)
}

/// Left-aligns text by padding to the target display width.
fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - text_width))
}

/// Truncates text with an ellipsis when it exceeds the display width.
fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut result = String::new();
    let mut current = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current + w > target {
            break;
        }
        result.push(ch);
        current += w;
    }
    result.push_str("...");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{CellGrid, parse_message};
    use crate::markup::Block;
    use pretty_assertions::assert_eq;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn sample_table(markup: &str) -> MarkupTable {
        CellGrid::parse(markup).unwrap().into_table()
    }

    #[test]
    fn two_by_two_grid_renders_five_lines() {
        let table = sample_table("%R1$C1 A %R1$C2 B %R2$C1 C %R2$C2 D");
        let lines = render_table(&table, &MarkupTheme::default(), 80);

        // top, header, separator, data row, bottom
        assert_eq!(lines.len(), 5);
        assert!(line_text(&lines[0]).starts_with('┌'));
        assert!(line_text(&lines[1]).contains('A'));
        assert!(line_text(&lines[2]).starts_with('├'));
        assert!(line_text(&lines[3]).contains('D'));
        assert!(line_text(&lines[4]).starts_with('└'));
    }

    #[test]
    fn sparse_grid_renders_empty_cells() {
        let table = sample_table("%R1$C1 A %R2$C2 B");
        let lines = render_table(&table, &MarkupTheme::default(), 80);

        let header = line_text(&lines[1]);
        assert!(header.contains('A'));
        assert!(!header.contains('B'));
        let data = line_text(&lines[3]);
        assert!(data.contains('B'));
    }

    #[test]
    fn header_row_uses_header_style() {
        let theme = MarkupTheme::default();
        let table = sample_table("%R1$C1 H %R2$C1 d");
        let lines = render_table(&table, &theme, 80);

        // Cell content spans sit between border spans.
        let header_cell = &lines[1].spans[2];
        assert_eq!(header_cell.style, theme.table_header);
        let data_cell = &lines[3].spans[2];
        assert_eq!(data_cell.style, theme.table_cell);
    }

    #[test]
    fn header_style_applies_even_without_row_one_cells() {
        // Only row 2 was supplied; the synthesized empty row 1 still
        // renders with header emphasis.
        let theme = MarkupTheme::default();
        let table = sample_table("%R2$C1 only");
        let lines = render_table(&table, &theme, 80);
        assert_eq!(lines[1].spans[2].style, theme.table_header);
    }

    #[test]
    fn empty_table_renders_nothing() {
        let table = MarkupTable { rows: vec![] };
        assert!(render_table(&table, &MarkupTheme::default(), 80).is_empty());
    }

    #[test]
    fn narrow_width_shrinks_columns() {
        let table = sample_table(
            "%R1$C1 a very long header indeed %R1$C2 another long header here",
        );
        let lines = render_table(&table, &MarkupTheme::default(), 30);
        for line in &lines {
            assert!(UnicodeWidthStr::width(line_text(line).as_str()) <= 30);
        }
    }

    #[test]
    fn single_row_table_has_no_separator() {
        let table = sample_table("%R1$C1 only");
        let lines = render_table(&table, &MarkupTheme::default(), 80);
        // top, header, bottom
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn truncation_keeps_width_and_adds_ellipsis() {
        assert_eq!(truncate_with_ellipsis("abcdefgh", 6), "abc...");
        assert_eq!(truncate_with_ellipsis("ab", 6), "ab");
        assert_eq!(truncate_with_ellipsis("abcdef", 2), "..");
    }

    #[test]
    fn renders_table_blocks_from_full_messages() {
        let blocks = parse_message("@&%R1$C1 Feature %R2$C1 Speed&@");
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table");
        };
        let lines = render_table(table, &MarkupTheme::default(), 40);
        assert!(line_text(&lines[1]).contains("Feature"));
        assert!(line_text(&lines[3]).contains("Speed"));
    }
}
