//! Writes rendered lines to a terminal as ANSI escape sequences.
//!
//! The renderer produces ratatui `Line`s so the same output can feed a
//! TUI buffer or, as here, be serialized straight to stdout.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as CColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use ratatui::style::{Color, Modifier};
use ratatui::text::Line;

/// Writes lines to `out`, with or without ANSI styling.
///
/// When `color` is false only the span contents are written, one line
/// per `Line`.
pub fn write_lines(out: &mut impl Write, lines: &[Line<'_>], color: bool) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            if color {
                if let Some(fg) = span.style.fg.and_then(convert_color) {
                    queue!(out, SetForegroundColor(fg))?;
                }
                if let Some(bg) = span.style.bg.and_then(convert_color) {
                    queue!(out, SetBackgroundColor(bg))?;
                }
                for attr in attributes(span.style.add_modifier) {
                    queue!(out, SetAttribute(attr))?;
                }
            }
            queue!(out, Print(span.content.as_ref()))?;
            if color {
                queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Maps a ratatui color onto its crossterm equivalent.
///
/// `Reset` maps to `None` so the terminal default stays untouched.
fn convert_color(color: Color) -> Option<CColor> {
    match color {
        Color::Reset => None,
        Color::Black => Some(CColor::Black),
        Color::Red => Some(CColor::DarkRed),
        Color::Green => Some(CColor::DarkGreen),
        Color::Yellow => Some(CColor::DarkYellow),
        Color::Blue => Some(CColor::DarkBlue),
        Color::Magenta => Some(CColor::DarkMagenta),
        Color::Cyan => Some(CColor::DarkCyan),
        Color::Gray => Some(CColor::Grey),
        Color::DarkGray => Some(CColor::DarkGrey),
        Color::LightRed => Some(CColor::Red),
        Color::LightGreen => Some(CColor::Green),
        Color::LightYellow => Some(CColor::Yellow),
        Color::LightBlue => Some(CColor::Blue),
        Color::LightMagenta => Some(CColor::Magenta),
        Color::LightCyan => Some(CColor::Cyan),
        Color::White => Some(CColor::White),
        Color::Rgb(r, g, b) => Some(CColor::Rgb { r, g, b }),
        Color::Indexed(i) => Some(CColor::AnsiValue(i)),
    }
}

/// Expands a modifier set into crossterm attributes.
fn attributes(modifier: Modifier) -> Vec<Attribute> {
    let mut attrs = Vec::new();
    if modifier.contains(Modifier::BOLD) {
        attrs.push(Attribute::Bold);
    }
    if modifier.contains(Modifier::DIM) {
        attrs.push(Attribute::Dim);
    }
    if modifier.contains(Modifier::ITALIC) {
        attrs.push(Attribute::Italic);
    }
    if modifier.contains(Modifier::UNDERLINED) {
        attrs.push(Attribute::Underlined);
    }
    if modifier.contains(Modifier::CROSSED_OUT) {
        attrs.push(Attribute::CrossedOut);
    }
    if modifier.contains(Modifier::REVERSED) {
        attrs.push(Attribute::Reverse);
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::style::Style;
    use ratatui::text::Span;

    #[test]
    fn plain_output_contains_no_escapes() {
        let lines = vec![Line::from(vec![
            Span::styled("a", Style::default().fg(Color::Red)),
            Span::raw("b"),
        ])];
        let mut out = Vec::new();
        write_lines(&mut out, &lines, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ab\n");
    }

    #[test]
    fn colored_output_wraps_spans_in_escapes() {
        let lines = vec![Line::from(Span::styled(
            "x",
            Style::default().fg(Color::Rgb(59, 130, 246)),
        ))];
        let mut out = Vec::new();
        write_lines(&mut out, &lines, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("x"));
        assert!(text.contains('\u{1b}'));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn reset_color_is_skipped() {
        assert_eq!(convert_color(Color::Reset), None);
        assert_eq!(convert_color(Color::Gray), Some(CColor::Grey));
    }

    #[test]
    fn bold_modifier_maps_to_bold_attribute() {
        let attrs = attributes(Modifier::BOLD | Modifier::DIM);
        assert_eq!(attrs, vec![Attribute::Bold, Attribute::Dim]);
    }
}
