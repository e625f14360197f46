// Avatar component
//
// Purely presentational: accepts the avatar source string and produces a
// glyph. The terminal cannot decode images, so the source only decides
// between a filled placeholder (a source was supplied) and a hollow one.

use crate::theme::Theme;
use ratatui::style::Style;
use ratatui::text::Span;

/// Placeholder glyph for the avatar image
pub fn glyph(src: &str) -> &'static str {
    if src.is_empty() {
        "○"
    } else {
        "◍"
    }
}

/// The avatar as a styled span, ready to sit in the header line
pub fn span<'a>(src: &str, theme: &Theme) -> Span<'a> {
    Span::styled(format!("{} ", glyph(src)), Style::default().fg(theme.highlight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_depends_only_on_presence() {
        assert_eq!(glyph("https://example.com/a.png"), "◍");
        assert_eq!(glyph("not even a url"), "◍");
        assert_eq!(glyph(""), "○");
    }
}
