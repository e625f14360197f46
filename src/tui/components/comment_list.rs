// Comment list component
//
// The thread below the post, newest last. Each item carries its own content
// value; deleting hands that value back to the owning state rather than an
// index, so removal is by value equality.

use crate::tui::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the comment list
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Comments;
    let comments = app.thread.comments();

    let height = area.height.saturating_sub(2) as usize;
    let content_width = area.width.saturating_sub(4) as usize;
    let (start, end) = visible_range(app.selected, comments.len(), height);

    let items: Vec<ListItem> = comments[start..end]
        .iter()
        .enumerate()
        .map(|(idx, comment)| {
            let actual_idx = start + idx;
            let is_selected = app.selected == Some(actual_idx);

            // Multi-line comments collapse to one row
            let mut line = format!("• {}", comment.replace('\n', " ⏎ "));
            truncate_to_width(&mut line, content_width);

            let style = if is_selected && focused {
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.comment)
            };

            ListItem::new(line).style(style)
        })
        .collect();

    // Title shows position while a comment is selected
    let title = match app.selected {
        Some(idx) if focused => format!(" Comentários ({}/{}) ", idx + 1, comments.len()),
        _ => format!(" Comentários ({}) ", comments.len()),
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.panel_border(focused))),
    );

    f.render_widget(list, area);
}

/// Window of comments to draw, keeping the selection visible
fn visible_range(selected: Option<usize>, total: usize, height: usize) -> (usize, usize) {
    if total == 0 || height == 0 {
        return (0, 0);
    }

    let offset = match selected {
        None => 0,
        Some(idx) if idx >= height => idx.saturating_sub(height - 1),
        Some(_) => 0,
    };

    (offset, (offset + height).min(total))
}

/// Truncate with ellipsis if line exceeds the available width
///
/// Uses unicode display width (not byte length) for accurate column math.
fn truncate_to_width(line: &mut String, width: usize) {
    if line.width() <= width {
        return;
    }
    let target_width = width.saturating_sub(1);

    let mut current_width = 0;
    let mut truncate_at = 0;
    for (i, c) in line.char_indices() {
        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        truncate_at = i + c.len_utf8();
    }

    line.truncate(truncate_at);
    line.push('…');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_range_keeps_selection_on_screen() {
        // No selection: window starts at the top
        assert_eq!(visible_range(None, 10, 4), (0, 4));
        // Selection inside the window
        assert_eq!(visible_range(Some(2), 10, 4), (0, 4));
        // Selection past the window: scrolls down
        assert_eq!(visible_range(Some(7), 10, 4), (4, 8));
        // Empty list
        assert_eq!(visible_range(None, 0, 4), (0, 0));
    }

    #[test]
    fn truncation_respects_display_width() {
        let mut line = "curto".to_string();
        truncate_to_width(&mut line, 10);
        assert_eq!(line, "curto");

        let mut line = "um comentário bastante longo".to_string();
        truncate_to_width(&mut line, 10);
        assert!(line.ends_with('…'));
        assert!(line.width() <= 10);
    }
}
