//! Theme for rendered messages.
//!
//! Styles for every markup element plus the message chrome, defaulting to
//! the Clark palette. Builder-style setters cover the styles callers
//! customize in practice.

use ratatui::style::{Color, Modifier, Style};

use crate::style::{
    BLUE_PRIMARY, BORDER, DEEP_BLUE, SKY_BLUE, SUCCESS, SURFACE_0, SURFACE_1, TEXT, TEXT_DIM,
    TEXT_MUTED,
};

/// Theme configuration for markup rendering.
#[derive(Debug, Clone)]
pub struct MarkupTheme {
    /// Style for ordinary text runs.
    pub text: Style,
    /// Style for bold spans.
    pub bold: Style,
    /// Style for inline code spans.
    pub code_inline: Style,
    /// Style for code block text.
    pub code_block_text: Style,
    /// Border color for code blocks.
    pub code_block_border: Color,
    /// Background color for code blocks.
    pub code_block_bg: Color,
    /// Style for bullet characters.
    pub list_bullet: Style,
    /// Border color for tables.
    pub table_border: Color,
    /// Style for header-row cell text.
    pub table_header: Style,
    /// Style for data cell text.
    pub table_cell: Style,
    /// Style for link display text.
    pub link_text: Style,
    /// Style for link URLs.
    pub link_url: Style,
    /// Style for the user's name in the message header.
    pub sender_user: Style,
    /// Style for the assistant's name in the message header.
    pub sender_assistant: Style,
    /// Style for message timestamps.
    pub timestamp: Style,
    /// Style for the image attachment line.
    pub attachment: Style,
    /// Style for the "Extracted text:" label.
    pub ocr_label: Style,
}

impl Default for MarkupTheme {
    fn default() -> Self {
        Self {
            text: Style::default().fg(TEXT),
            bold: Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            code_inline: Style::default().fg(SKY_BLUE).bg(SURFACE_1),
            code_block_text: Style::default().fg(TEXT).bg(SURFACE_0),
            code_block_border: BORDER,
            code_block_bg: SURFACE_0,
            list_bullet: Style::default().fg(BLUE_PRIMARY),
            table_border: BORDER,
            table_header: Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            table_cell: Style::default().fg(TEXT),
            link_text: Style::default()
                .fg(DEEP_BLUE)
                .add_modifier(Modifier::UNDERLINED),
            link_url: Style::default().fg(TEXT_MUTED),
            sender_user: Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD),
            sender_assistant: Style::default()
                .fg(BLUE_PRIMARY)
                .add_modifier(Modifier::BOLD),
            timestamp: Style::default().fg(TEXT_DIM),
            attachment: Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC),
            ocr_label: Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD),
        }
    }
}

impl MarkupTheme {
    /// Creates a theme with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ordinary text style.
    #[must_use]
    pub fn with_text(mut self, style: Style) -> Self {
        self.text = style;
        self
    }

    /// Sets the bold style.
    #[must_use]
    pub fn with_bold(mut self, style: Style) -> Self {
        self.bold = style;
        self
    }

    /// Sets the inline code style.
    #[must_use]
    pub fn with_code_inline(mut self, style: Style) -> Self {
        self.code_inline = style;
        self
    }

    /// Sets the table border color.
    #[must_use]
    pub fn with_table_border(mut self, color: Color) -> Self {
        self.table_border = color;
        self
    }

    /// Sets the link display text style.
    #[must_use]
    pub fn with_link_text(mut self, style: Style) -> Self {
        self.link_text = style;
        self
    }
}
