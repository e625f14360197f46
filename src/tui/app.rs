// TUI application state
//
// One mounted card: the read-only post, the comment thread state, and the
// UI chrome around them (focus, comment selection, toast, input debounce).
// All mutations happen synchronously inside key handlers; rendering reads
// this struct and derives everything else.

use super::components::Toast;
use super::input::InputHandler;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::post::Post;
use crate::state::{CommentThread, Outcome, ThreadAction};
use crate::theme::Theme;

/// Which part of the card receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The comment form (typing edits the draft)
    #[default]
    Form,
    /// The comment list (navigation, delete, copy)
    Comments,
}

impl Focus {
    /// Cycle to the other half of the card (Tab behavior)
    pub fn next(self) -> Self {
        match self {
            Focus::Form => Focus::Comments,
            Focus::Comments => Focus::Form,
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// The post being rendered (immutable for the app's lifetime)
    pub post: Post,

    /// Comment list + draft, local to this mounted card
    pub thread: CommentThread,

    /// Which panel currently has focus
    pub focus: Focus,

    /// Selected comment index (None = no selection)
    pub selected: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current color theme
    pub theme: Theme,

    /// Transient confirmation overlay
    pub toast: Option<Toast>,

    /// Log buffer for the status bar's latest-warning display
    pub log_buffer: LogBuffer,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,
}

impl App {
    pub fn new(post: Post, log_buffer: LogBuffer, config: &Config) -> Self {
        Self {
            post,
            thread: CommentThread::new(),
            focus: Focus::default(),
            selected: None,
            should_quit: false,
            theme: Theme::by_name(&config.theme),
            toast: None,
            log_buffer,
            input_handler: InputHandler::default(),
        }
    }

    /// Apply a thread action and surface feedback for it
    pub fn dispatch(&mut self, action: ThreadAction) {
        match self.thread.apply(action) {
            Outcome::Published => {
                tracing::debug!("comment published");
                self.show_toast("✓ Comentário publicado");
            }
            Outcome::RequiredBlocked => {
                // The form shows the validation message; no toast needed
                tracing::debug!("empty draft submission blocked");
            }
            Outcome::DraftEdited => {}
            Outcome::Deleted(0) => {}
            Outcome::Deleted(1) => self.show_toast("✓ Comentário apagado"),
            Outcome::Deleted(n) => {
                tracing::debug!(count = n, "duplicate comments removed together");
                self.show_toast("✓ Comentários apagados");
            }
        }
        self.clamp_selection();
    }

    /// Toggle focus between the form and the comment list
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// The comment the selection currently points at
    pub fn selected_comment(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.thread.comments().get(idx))
            .map(String::as_str)
    }

    /// Move selection up (or onto the last comment when nothing is selected)
    pub fn select_previous(&mut self) {
        let count = self.thread.comments().len();
        if count == 0 {
            return;
        }
        self.selected = match self.selected {
            None => Some(count - 1),
            Some(0) => Some(0),
            Some(idx) => Some(idx - 1),
        };
    }

    /// Move selection down (or onto the first comment when nothing is selected)
    pub fn select_next(&mut self) {
        let count = self.thread.comments().len();
        if count == 0 {
            return;
        }
        self.selected = match self.selected {
            None => Some(0),
            Some(idx) => Some((idx + 1).min(count - 1)),
        };
    }

    /// Clear the comment selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Delete the selected comment, by value
    ///
    /// The list item hands its own content back to the owning state - the
    /// command-value equivalent of a per-item delete callback.
    pub fn delete_selected(&mut self) {
        if let Some(comment) = self.selected_comment().map(str::to_string) {
            self.dispatch(ThreadAction::DeleteComment(comment));
        }
    }

    /// Copy the selected comment to the system clipboard
    pub fn copy_selected(&mut self) {
        let Some(comment) = self.selected_comment().map(str::to_string) else {
            return;
        };
        if super::clipboard::copy_to_clipboard(&comment).is_ok() {
            self.show_toast("✓ Copiado");
        } else {
            self.show_toast("✗ Falha ao copiar");
        }
    }

    /// Show a transient confirmation message
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Periodic tick: drop expired toasts
    ///
    /// The redraw that follows each tick also refreshes the relative
    /// timestamp label, which is derived from `Utc::now()` at render time.
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Keep the selection inside the (possibly shrunk) comment list
    fn clamp_selection(&mut self) {
        let count = self.thread.comments().len();
        if count == 0 {
            self.selected = None;
        } else if let Some(idx) = self.selected {
            if idx >= count {
                self.selected = Some(count - 1);
            }
        }
    }
}
