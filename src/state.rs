// Comment thread state
//
// The mutable half of the card: the comment list and the draft of the next
// comment. Both live for exactly one mounted card - they are created seeded,
// mutated synchronously by user actions, and discarded on exit. There is no
// backing store and no concurrent writer.
//
// UI code never reaches into the fields directly; it dispatches explicit
// `ThreadAction` values and re-renders from the resulting state. This keeps
// every transition testable without a terminal.

/// The single comment present before any user interaction
pub const SEED_COMMENT: &str = "Post muito bacana hein!";

/// Validation message shown when an empty draft is submitted
pub const REQUIRED_MESSAGE: &str = "Esse campo é obrigatório";

/// Commands dispatched from the UI to the thread state
///
/// Deletion carries the comment's value, not its index: removal is by value
/// equality, so two identical comments disappear together. That matches the
/// source behavior and is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadAction {
    /// Submit the current draft as a new comment
    Publish,
    /// Append a character to the draft
    InsertChar(char),
    /// Append a line break to the draft
    InsertNewline,
    /// Remove the last character of the draft
    DeleteBack,
    /// Discard the whole draft
    ClearDraft,
    /// Remove every comment equal to the given value
    DeleteComment(String),
}

/// What a dispatched action did, for toast/log feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Draft appended to the comment list, draft cleared
    Published,
    /// Publish refused: the draft was empty, validation message set
    RequiredBlocked,
    /// Draft text changed (validation message cleared)
    DraftEdited,
    /// Comments removed (0 when the value was not present)
    Deleted(usize),
}

/// Comment list + draft for one mounted card
#[derive(Debug, Clone)]
pub struct CommentThread {
    comments: Vec<String>,
    draft: String,
    validation: Option<&'static str>,
}

impl CommentThread {
    /// Create the thread in its seed state: one sample comment, empty draft
    pub fn new() -> Self {
        Self {
            comments: vec![SEED_COMMENT.to_string()],
            draft: String::new(),
            validation: None,
        }
    }

    /// All comments, oldest first
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// The in-progress comment text
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Current validation message, if a required-field check fired
    pub fn validation(&self) -> Option<&'static str> {
        self.validation
    }

    /// Derived flag that drives the disabled state of the submit affordance
    pub fn is_draft_empty(&self) -> bool {
        self.draft.is_empty()
    }

    /// Apply one action and report what happened
    pub fn apply(&mut self, action: ThreadAction) -> Outcome {
        match action {
            ThreadAction::Publish => self.publish(),
            ThreadAction::InsertChar(c) => {
                self.validation = None;
                self.draft.push(c);
                Outcome::DraftEdited
            }
            ThreadAction::InsertNewline => {
                self.validation = None;
                self.draft.push('\n');
                Outcome::DraftEdited
            }
            ThreadAction::DeleteBack => {
                self.validation = None;
                self.draft.pop();
                Outcome::DraftEdited
            }
            ThreadAction::ClearDraft => {
                self.validation = None;
                self.draft.clear();
                Outcome::DraftEdited
            }
            ThreadAction::DeleteComment(value) => {
                let before = self.comments.len();
                self.comments.retain(|c| c != &value);
                Outcome::Deleted(before - self.comments.len())
            }
        }
    }

    /// Append the draft to the comment list and clear it
    ///
    /// An empty draft never reaches the list: the submit affordance is
    /// disabled while the draft is empty, and this guard independently
    /// refuses the submission with the required-field message.
    fn publish(&mut self) -> Outcome {
        if self.draft.is_empty() {
            self.validation = Some(REQUIRED_MESSAGE);
            return Outcome::RequiredBlocked;
        }
        self.comments.push(std::mem::take(&mut self.draft));
        self.validation = None;
        Outcome::Published
    }
}

impl Default for CommentThread {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(thread: &mut CommentThread, text: &str) {
        for c in text.chars() {
            thread.apply(ThreadAction::InsertChar(c));
        }
    }

    #[test]
    fn seed_state() {
        let thread = CommentThread::new();
        assert_eq!(thread.comments(), [SEED_COMMENT]);
        assert_eq!(thread.draft(), "");
        assert!(thread.is_draft_empty());
        assert!(thread.validation().is_none());
    }

    #[test]
    fn publish_appends_and_clears_draft() {
        let mut thread = CommentThread::new();
        typed(&mut thread, "Muito bom!");
        assert!(!thread.is_draft_empty());

        assert_eq!(thread.apply(ThreadAction::Publish), Outcome::Published);
        assert_eq!(thread.comments(), [SEED_COMMENT, "Muito bom!"]);
        assert_eq!(thread.draft(), "");
    }

    #[test]
    fn publish_preserves_order() {
        let mut thread = CommentThread::new();
        for text in ["primeiro", "segundo", "terceiro"] {
            typed(&mut thread, text);
            thread.apply(ThreadAction::Publish);
        }
        assert_eq!(
            thread.comments(),
            [SEED_COMMENT, "primeiro", "segundo", "terceiro"]
        );
    }

    #[test]
    fn empty_publish_is_blocked_with_message() {
        let mut thread = CommentThread::new();
        assert_eq!(thread.apply(ThreadAction::Publish), Outcome::RequiredBlocked);
        assert_eq!(thread.comments().len(), 1);
        assert_eq!(thread.validation(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn editing_clears_validation() {
        let mut thread = CommentThread::new();
        thread.apply(ThreadAction::Publish);
        assert!(thread.validation().is_some());

        thread.apply(ThreadAction::InsertChar('a'));
        assert!(thread.validation().is_none());
        assert_eq!(thread.draft(), "a");
    }

    #[test]
    fn delete_removes_by_value() {
        let mut thread = CommentThread::new();
        typed(&mut thread, "apagar");
        thread.apply(ThreadAction::Publish);
        typed(&mut thread, "manter");
        thread.apply(ThreadAction::Publish);

        let outcome = thread.apply(ThreadAction::DeleteComment("apagar".to_string()));
        assert_eq!(outcome, Outcome::Deleted(1));
        assert_eq!(thread.comments(), [SEED_COMMENT, "manter"]);
    }

    #[test]
    fn delete_removes_all_duplicates() {
        // Value equality, not identity: identical comments go together
        let mut thread = CommentThread::new();
        for _ in 0..2 {
            typed(&mut thread, "eco");
            thread.apply(ThreadAction::Publish);
        }

        let outcome = thread.apply(ThreadAction::DeleteComment("eco".to_string()));
        assert_eq!(outcome, Outcome::Deleted(2));
        assert_eq!(thread.comments(), [SEED_COMMENT]);
    }

    #[test]
    fn delete_of_absent_value_is_noop() {
        let mut thread = CommentThread::new();
        let outcome = thread.apply(ThreadAction::DeleteComment("nunca existiu".to_string()));
        assert_eq!(outcome, Outcome::Deleted(0));
        assert_eq!(thread.comments(), [SEED_COMMENT]);
    }

    #[test]
    fn delete_preserves_relative_order() {
        let mut thread = CommentThread::new();
        for text in ["a", "b", "c"] {
            typed(&mut thread, text);
            thread.apply(ThreadAction::Publish);
        }
        thread.apply(ThreadAction::DeleteComment("b".to_string()));
        assert_eq!(thread.comments(), [SEED_COMMENT, "a", "c"]);
    }

    #[test]
    fn newline_and_backspace_edit_the_draft() {
        let mut thread = CommentThread::new();
        typed(&mut thread, "oi");
        thread.apply(ThreadAction::InsertNewline);
        typed(&mut thread, "tudo bem?");
        assert_eq!(thread.draft(), "oi\ntudo bem?");

        thread.apply(ThreadAction::DeleteBack);
        assert_eq!(thread.draft(), "oi\ntudo bem");

        thread.apply(ThreadAction::ClearDraft);
        assert!(thread.is_draft_empty());
    }
}
