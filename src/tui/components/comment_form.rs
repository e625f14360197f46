// Comment form component
//
// The draft input ("comment" field) with its placeholder prompt, the
// Publicar affordance, and the required-field validation message. The
// affordance renders disabled whenever the draft is empty - the same
// derived flag that blocks submission in the state layer.

use crate::card::{DRAFT_PLACEHOLDER, FORM_LABEL, PUBLISH_LABEL};
use crate::tui::app::{App, Focus};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows the form occupies, including borders
///
/// Two borders + up to three draft rows + the affordance row + one row for
/// the validation message.
pub const FORM_HEIGHT: u16 = 7;

/// Rows available for draft text inside the form
const DRAFT_ROWS: usize = 3;

/// Render the comment form
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Form;

    let block = Block::default()
        .title(format!(" {} ", FORM_LABEL))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.panel_border(focused)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    // Draft text, or the placeholder prompt while it is empty
    let draft_lines: Vec<&str> = if app.thread.is_draft_empty() {
        vec![DRAFT_PLACEHOLDER]
    } else {
        app.thread.draft().split('\n').collect()
    };
    let draft_style = if app.thread.is_draft_empty() {
        Style::default().fg(theme.placeholder)
    } else {
        Style::default().fg(theme.body)
    };

    // Show the tail when the draft is taller than the input
    let skip = draft_lines.len().saturating_sub(DRAFT_ROWS);
    for text in draft_lines.iter().skip(skip) {
        lines.push(Line::styled(*text, draft_style));
    }
    while lines.len() < DRAFT_ROWS {
        lines.push(Line::default());
    }

    // Submit affordance, disabled while the draft is empty
    let publish_style = if app.thread.is_draft_empty() {
        Style::default().fg(theme.publish_disabled)
    } else {
        Style::default()
            .fg(theme.publish)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::styled(format!("[ {} ]", PUBLISH_LABEL), publish_style),
        Span::styled("  Enter", Style::default().fg(theme.placeholder)),
    ]));

    // Validation message, present only until the next edit
    if let Some(message) = app.thread.validation() {
        lines.push(Line::styled(
            message,
            Style::default().fg(theme.validation),
        ));
    }

    f.render_widget(Paragraph::new(lines), inner);

    // Place the cursor at the end of the draft while typing
    if focused && !app.thread.is_draft_empty() {
        let visible = draft_lines.len() - skip;
        let last = draft_lines.last().copied().unwrap_or_default();
        let x = inner.x + (last.width() as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + (visible as u16).saturating_sub(1);
        f.set_cursor_position(Position::new(x, y));
    }
}
