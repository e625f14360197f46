// Status bar component
//
// Key hints for whichever panel has focus, plus the most recent warning or
// error captured by the log buffer (logs cannot print to the alternate
// screen directly).

use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar with key hints
pub fn render(f: &mut Frame, area: Rect, app: &App, bp: Breakpoint) {
    let theme = &app.theme;

    let hints = match (app.focus, bp.at_least(Breakpoint::Normal)) {
        (Focus::Form, true) => {
            " digite para comentar │ Enter publicar │ Alt+Enter quebra de linha │ Tab comentários"
        }
        (Focus::Form, false) => " Enter publicar │ Tab lista",
        (Focus::Comments, true) => {
            " ↑/↓ navegar │ d apagar │ y copiar │ Tab formulário │ q sair"
        }
        (Focus::Comments, false) => " ↑/↓ │ d apagar │ q sair",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(theme.status_bar))];

    // Surface the latest captured warning/error, if any
    if let Some(entry) = app.log_buffer.latest_notable() {
        spans.push(Span::styled(
            format!("  │ {}: {}", entry.level.as_str(), entry.message),
            Style::default().fg(theme.validation),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
