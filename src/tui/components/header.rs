// Header component
//
// Avatar + author name + role on the first row, the publication time on the
// second. The visible label is the relative form ("há 5 minutos"); on wide
// terminals the absolute long form rides along as its title, the way a
// tooltip would. Both labels are derived from `published_at` on every
// render, so the relative one stays fresh as ticks come in.

use super::avatar;
use crate::timefmt;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the card header
pub fn render(f: &mut Frame, area: Rect, app: &App, bp: Breakpoint) {
    let author = &app.post.author;
    let theme = &app.theme;

    let mut author_line = vec![
        avatar::span(&author.avatar_url, theme),
        Span::styled(
            author.name.clone(),
            Style::default()
                .fg(theme.author)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    // Role is the first thing to go on cramped terminals
    if bp.at_least(Breakpoint::Normal) {
        author_line.push(Span::styled(
            format!("  {}", author.role),
            Style::default().fg(theme.role),
        ));
    }

    let relative = timefmt::format_relative(app.post.published_at, Utc::now());
    let mut time_line = vec![Span::styled(relative, Style::default().fg(theme.timestamp))];
    if bp.at_least(Breakpoint::Wide) {
        time_line.push(Span::styled(
            format!("  ·  {}", timefmt::format_published(app.post.published_at)),
            Style::default().fg(theme.role),
        ));
    }

    let header = Paragraph::new(vec![Line::from(author_line), Line::from(time_line)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(header, area);
}
