//! Terminal presentation of parsed messages.
//!
//! Maps the markup block tree onto ratatui `Line`s: paragraphs become
//! styled spans, bullet lists get `•` prefixes, code blocks and tables
//! render with box-drawing borders, and links display as
//! "text (url)". [`render_message`] adds the message chrome around the
//! content: sender/timestamp header and the verbatim image fields.

mod table;
pub mod theme;

pub use table::render_table;
pub use theme::MarkupTheme;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use clark_protocol::{Message, Role};

use crate::markup::{Block, Inline, parse_message};

/// Bullet character for list items.
const BULLET: &str = "•";

/// Box-drawing characters for code block borders.
mod border {
    pub const TOP_LEFT: char = '┌';
    pub const TOP_RIGHT: char = '┐';
    pub const BOTTOM_LEFT: char = '└';
    pub const BOTTOM_RIGHT: char = '┘';
    pub const HORIZONTAL: char = '─';
    pub const VERTICAL: char = '│';
}

/// Renders a whole message: chrome first, then the parsed content.
///
/// `image_url` and `image_text` are displayed verbatim and never go
/// through the markup engine.
#[must_use]
pub fn render_message(message: &Message, theme: &MarkupTheme, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let sender_style = match message.role {
        Role::User => theme.sender_user,
        Role::Assistant => theme.sender_assistant,
    };
    lines.push(Line::from(vec![
        Span::styled(message.role.label().to_string(), sender_style),
        Span::raw("  "),
        Span::styled(
            message.created_at.format("%H:%M").to_string(),
            theme.timestamp,
        ),
    ]));

    if let Some(url) = &message.image_url {
        lines.push(Line::from(vec![
            Span::styled("[image] ".to_string(), theme.attachment),
            Span::styled(url.clone(), theme.attachment),
        ]));
    }

    if let Some(text) = &message.image_text {
        lines.push(Line::from(vec![
            Span::styled("Extracted text: ".to_string(), theme.ocr_label),
            Span::styled(text.clone(), theme.text),
        ]));
    }

    lines.extend(render_blocks(&parse_message(&message.content), theme, width));
    lines
}

/// Renders parsed blocks to lines.
#[must_use]
pub fn render_blocks(blocks: &[Block], theme: &MarkupTheme, width: u16) -> Vec<Line<'static>> {
    let mut writer = LineWriter::new();

    for block in blocks {
        match block {
            Block::Paragraph(nodes) => {
                write_inline(&mut writer, nodes, false, theme, width);
                writer.flush();
            }
            Block::BulletList(items) => {
                for item in items {
                    writer.push(Span::styled(format!("{BULLET} "), theme.list_bullet));
                    write_inline(&mut writer, item, false, theme, width);
                    writer.flush();
                }
            }
            Block::Table(t) => {
                writer.flush();
                writer.lines.extend(render_table(t, theme, width));
            }
        }
    }

    writer.finish()
}

/// Span accumulator that flushes completed lines.
struct LineWriter {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl LineWriter {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
        }
    }

    fn push(&mut self, span: Span<'static>) {
        self.current.push(span);
    }

    /// Ends the current line unconditionally, keeping empty lines.
    fn break_line(&mut self) {
        self.lines.push(Line::from(std::mem::take(&mut self.current)));
    }

    /// Ends the current line only if it holds content.
    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.break_line();
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        self.lines
    }
}

/// Writes an inline node sequence into the line writer.
fn write_inline(
    writer: &mut LineWriter,
    nodes: &[Inline],
    in_bold: bool,
    theme: &MarkupTheme,
    width: u16,
) {
    for node in nodes {
        match node {
            Inline::Text(text) => {
                let style = if in_bold { theme.bold } else { theme.text };
                write_text(writer, text, style);
            }
            Inline::Bold(children) => {
                write_inline(writer, children, true, theme, width);
            }
            Inline::Code(code) => {
                write_text(writer, code, theme.code_inline);
            }
            Inline::CodeBlock(code) => {
                writer.flush();
                writer.lines.extend(render_code_block(code, theme, width));
            }
            Inline::Link { text, url } => {
                let text_style = if in_bold {
                    theme.link_text.add_modifier(Modifier::BOLD)
                } else {
                    theme.link_text
                };
                writer.push(Span::styled(text.clone(), text_style));
                writer.push(Span::styled(format!(" ({url})"), theme.link_url));
            }
        }
    }
}

/// Writes text that may span multiple lines.
fn write_text(writer: &mut LineWriter, text: &str, style: Style) {
    for (i, piece) in text.split('\n').enumerate() {
        if i > 0 {
            writer.break_line();
        }
        if !piece.is_empty() {
            writer.push(Span::styled(piece.to_string(), style));
        }
    }
}

/// Renders a fenced code block with borders and background.
fn render_code_block(code: &str, theme: &MarkupTheme, width: u16) -> Vec<Line<'static>> {
    let border_style = Style::default().fg(theme.code_block_border);

    // Inner width fits the longest line, capped by the render width.
    let max_inner = (width as usize).saturating_sub(4).max(1);
    let inner = code
        .split('\n')
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
        .clamp(1, max_inner);

    let rule: String = std::iter::repeat_n(border::HORIZONTAL, inner + 2).collect();
    let mut lines = vec![Line::from(Span::styled(
        format!("{}{}{}", border::TOP_LEFT, rule, border::TOP_RIGHT),
        border_style,
    ))];

    for row in code.split('\n') {
        let clipped = clip_to_width(row, inner);
        let pad = inner.saturating_sub(UnicodeWidthStr::width(clipped.as_str()));
        lines.push(Line::from(vec![
            Span::styled(border::VERTICAL.to_string(), border_style),
            Span::styled(
                format!(" {}{} ", clipped, " ".repeat(pad)),
                theme.code_block_text,
            ),
            Span::styled(border::VERTICAL.to_string(), border_style),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!("{}{}{}", border::BOTTOM_LEFT, rule, border::BOTTOM_RIGHT),
        border_style,
    )));
    lines
}

/// Clips a code line to the given display width, without an ellipsis.
fn clip_to_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current + w > max_width {
            break;
        }
        result.push(ch);
        current += w;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render(content: &str) -> Vec<Line<'static>> {
        render_blocks(&parse_message(content), &MarkupTheme::default(), 80)
    }

    // ============================================================
    // Block Rendering
    // ============================================================

    #[test]
    fn paragraph_renders_as_one_line() {
        let lines = render("hello world");
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "hello world");
    }

    #[test]
    fn empty_content_renders_no_lines() {
        assert!(render("").is_empty());
    }

    #[test]
    fn bold_span_gets_bold_style() {
        let theme = MarkupTheme::default();
        let lines = render_blocks(&parse_message("a **b**"), &theme, 80);
        let bold_span = lines[0]
            .spans
            .iter()
            .find(|s| s.content.as_ref() == "b")
            .unwrap();
        assert_eq!(bold_span.style, theme.bold);
    }

    #[test]
    fn bullet_items_get_bullet_prefixes() {
        let lines = render("#a~b#");
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "• a");
        assert_eq!(line_text(&lines[1]), "• b");
    }

    #[test]
    fn empty_bullet_list_renders_no_lines() {
        assert!(render("#~#").is_empty());
    }

    #[test]
    fn newlines_in_paragraphs_break_lines() {
        let lines = render("one\ntwo");
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "one");
        assert_eq!(line_text(&lines[1]), "two");
    }

    #[test]
    fn code_block_renders_bordered() {
        let lines = render("```let x = 1;```");
        assert_eq!(lines.len(), 3);
        assert!(line_text(&lines[0]).starts_with('┌'));
        assert!(line_text(&lines[1]).contains("let x = 1;"));
        assert!(line_text(&lines[2]).starts_with('└'));
    }

    #[test]
    fn code_block_flushes_surrounding_text() {
        let lines = render("before ```x``` after");
        assert_eq!(line_text(&lines[0]), "before ");
        assert!(line_text(&lines[1]).starts_with('┌'));
        assert_eq!(line_text(&lines[4]), " after");
    }

    #[test]
    fn link_renders_display_text_and_url() {
        let lines = render("(click)/%^example.com^%/");
        assert_eq!(line_text(&lines[0]), "click (https://example.com)");
    }

    #[test]
    fn table_block_renders_between_paragraphs() {
        let lines = render("before@&%R1$C1 X&@after");
        assert_eq!(line_text(&lines[0]), "before");
        assert!(line_text(&lines[1]).starts_with('┌'));
        assert_eq!(line_text(lines.last().unwrap()), "after");
    }

    // ============================================================
    // Message Chrome
    // ============================================================

    fn message(role: Role, content: &str) -> Message {
        match role {
            Role::User => Message::user(Uuid::new_v4(), content),
            Role::Assistant => Message::assistant(Uuid::new_v4(), content),
        }
    }

    #[test]
    fn message_header_carries_sender_and_timestamp() {
        let msg = message(Role::Assistant, "hi");
        let lines = render_message(&msg, &MarkupTheme::default(), 80);

        let header = line_text(&lines[0]);
        assert!(header.starts_with("Clark"));
        assert!(header.contains(&msg.created_at.format("%H:%M").to_string()));
        assert_eq!(line_text(&lines[1]), "hi");
    }

    #[test]
    fn image_fields_render_verbatim_without_parsing() {
        let msg = message(Role::User, "caption")
            .with_image_url("data:image/png;base64,AAAA")
            .with_image_text("**not parsed**");
        let lines = render_message(&msg, &MarkupTheme::default(), 80);

        assert_eq!(line_text(&lines[1]), "[image] data:image/png;base64,AAAA");
        // Bold markers in OCR text stay literal.
        assert_eq!(line_text(&lines[2]), "Extracted text: **not parsed**");
        assert_eq!(line_text(&lines[3]), "caption");
    }

    #[test]
    fn user_and_assistant_use_different_sender_styles() {
        let theme = MarkupTheme::default();
        let user = render_message(&message(Role::User, "u"), &theme, 80);
        let assistant = render_message(&message(Role::Assistant, "a"), &theme, 80);
        assert_eq!(user[0].spans[0].style, theme.sender_user);
        assert_eq!(assistant[0].spans[0].style, theme.sender_assistant);
    }
}
