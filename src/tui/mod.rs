// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Dispatching key events to the focused half of the card
//
// All state transitions happen synchronously inside the key handlers below;
// the next iteration of the loop redraws from the resulting state, so every
// change is visible on the very next frame.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::post::Post;
use crate::state::ThreadAction;
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
pub async fn run_tui(post: Post, log_buffer: LogBuffer, config: Config) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(post, log_buffer, &config);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, config.tick_ms).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two event sources, multiplexed with tokio::select!:
/// 1. Keyboard input (editing, navigation, commands)
/// 2. Timer ticks (toast expiry, and redraws that keep the relative
///    timestamp label fresh)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_ms: u64,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(tick_ms));

    loop {
        // Draw the UI
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: global keys, then the focused half of the card
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Press => {
            // Ctrl+C always quits, regardless of focus
            if key_event.modifiers.contains(KeyModifiers::CONTROL)
                && key_event.code == KeyCode::Char('c')
            {
                app.should_quit = true;
                return;
            }

            match app.focus {
                Focus::Form => handle_form_key(app, key_event),
                Focus::Comments => handle_comments_key(app, key_event),
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// Keys while the comment form has focus
///
/// Text entry bypasses the InputHandler debounce on purpose: pressing the
/// same character twice in a row is normal typing, and held Backspace
/// should keep deleting at the terminal's own repeat rate.
fn handle_form_key(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    match key {
        // Alt+Enter inserts a line break into the draft
        KeyCode::Enter if key_event.modifiers.contains(KeyModifiers::ALT) => {
            app.dispatch(ThreadAction::InsertNewline);
        }
        // Enter submits (the state layer refuses an empty draft)
        KeyCode::Enter => {
            if app.handle_key_press(key) {
                app.dispatch(ThreadAction::Publish);
            }
        }
        KeyCode::Backspace => {
            app.dispatch(ThreadAction::DeleteBack);
        }
        // Ctrl+U discards the whole draft
        KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(ThreadAction::ClearDraft);
        }
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(ThreadAction::InsertChar(c));
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if app.handle_key_press(key) {
                app.focus_next();
            }
        }
        // Esc blurs the form onto the comment list
        KeyCode::Esc => {
            if app.handle_key_press(key) {
                app.focus = Focus::Comments;
            }
        }
        _ => {}
    }
}

/// Keys while the comment list has focus
fn handle_comments_key(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    // Navigation and actions share the debounce/repeat handling
    if !app.handle_key_press(key) {
        return;
    }

    match key {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Esc => app.clear_selection(),
        KeyCode::Tab | KeyCode::BackTab => app.focus_next(),
        _ => {}
    }
}
