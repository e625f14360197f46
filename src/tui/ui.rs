// UI rendering logic
//
// The card is a fixed vertical stack; `draw` carves the frame into the five
// component areas and delegates. Rendering is a pure function of App state:
// it mutates nothing, so drawing the same state twice paints the same card.

use super::app::App;
use super::components::{comment_form, comment_list, content, header, status_bar};
use super::layout::Breakpoint;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

/// Render the whole card
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let bp = Breakpoint::from_width(area.width);

    // The body gets exactly the rows its recognized lines need (plus one
    // spacer); comments take whatever is left.
    let body_rows = content::line_count(&app.post.content).max(1) + 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                          // header
            Constraint::Length(body_rows),                  // post body
            Constraint::Length(comment_form::FORM_HEIGHT),  // comment form
            Constraint::Min(4),                             // comment list
            Constraint::Length(1),                          // status bar
        ])
        .split(area);

    header::render(f, chunks[0], app, bp);
    content::render(f, chunks[1], app);
    comment_form::render(f, chunks[2], app);
    comment_list::render(f, chunks[3], app);
    status_bar::render(f, chunks[4], app, bp);

    // Toast overlays everything else
    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}
