// Content component
//
// One rendered row per recognized content line: paragraphs as plain text,
// links styled and underlined. Lines with an unrecognized kind produce no
// output at all - a silent skip, not an error.

use crate::post::ContentLine;
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Build the display lines for the post body
pub fn lines<'a>(content: &'a [ContentLine], theme: &Theme) -> Vec<Line<'a>> {
    content
        .iter()
        .filter_map(|line| match line {
            ContentLine::Paragraph { text } => Some(Line::styled(
                text.as_str(),
                Style::default().fg(theme.body),
            )),
            ContentLine::Link { text } => Some(Line::styled(
                text.as_str(),
                Style::default()
                    .fg(theme.link)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            ContentLine::Unknown => None,
        })
        .collect()
}

/// Number of rows the body needs before wrapping
pub fn line_count(content: &[ContentLine]) -> u16 {
    content
        .iter()
        .filter(|line| !matches!(line, ContentLine::Unknown))
        .count() as u16
}

/// Render the post body
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let body = Paragraph::new(lines(&app.post.content, &app.theme)).wrap(Wrap { trim: false });
    f.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_content() -> Vec<ContentLine> {
        vec![
            ContentLine::Paragraph {
                text: "A".to_string(),
            },
            ContentLine::Link {
                text: "B".to_string(),
            },
            ContentLine::Unknown,
        ]
    }

    #[test]
    fn unknown_lines_render_nothing() {
        let theme = Theme::default();
        let content = mixed_content();
        let rendered = lines(&content, &theme);
        assert_eq!(rendered.len(), 2);
        assert_eq!(line_count(&mixed_content()), 2);
    }

    #[test]
    fn links_are_underlined() {
        let theme = Theme::default();
        let content = mixed_content();
        let rendered = lines(&content, &theme);
        let link_style = rendered[1].spans[0].style;
        assert!(link_style.add_modifier.contains(Modifier::UNDERLINED));
        // Paragraphs are not
        let para_style = rendered[0].spans[0].style;
        assert!(!para_style.add_modifier.contains(Modifier::UNDERLINED));
    }
}
