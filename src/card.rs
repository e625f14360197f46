// Plain-text card rendering
//
// `format_card` recomputes the whole card as a pure function of the post,
// the thread state and the current instant. The TUI is the interactive
// surface; this is the headless one (`--no-tui`), and it doubles as the
// reference output for tests: rendering twice with identical inputs must
// produce identical text.

use crate::post::{ContentLine, Post, LINK_PLACEHOLDER};
use crate::state::CommentThread;
use crate::timefmt;
use chrono::{DateTime, Utc};

/// Placeholder prompt shown while the draft is empty
pub const DRAFT_PLACEHOLDER: &str = "Deixe um comentário";

/// Label above the comment form
pub const FORM_LABEL: &str = "Deixe seu feedback";

/// Label of the submit affordance
pub const PUBLISH_LABEL: &str = "Publicar";

/// Render the full card as plain text
pub fn format_card(post: &Post, thread: &CommentThread, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    // Header: author, then the time element in all three forms
    out.push_str(&format!("{} · {}\n", post.author.name, post.author.role));
    out.push_str(&format!(
        "{} ({})\n",
        timefmt::format_relative(post.published_at, now),
        timefmt::format_published(post.published_at),
    ));
    out.push_str(&format!("{}\n\n", timefmt::iso8601(post.published_at)));

    // Body: one output line per recognized content line
    for line in &post.content {
        match line {
            ContentLine::Paragraph { text } => out.push_str(&format!("{}\n", text)),
            ContentLine::Link { text } => {
                out.push_str(&format!("{} ({})\n", text, LINK_PLACEHOLDER))
            }
            // Unrecognized kind: render nothing, silently
            ContentLine::Unknown => {}
        }
    }

    // Comment form
    out.push_str(&format!("\n{}\n", FORM_LABEL));
    if thread.is_draft_empty() {
        out.push_str(&format!("> {}\n", DRAFT_PLACEHOLDER));
    } else {
        for draft_line in thread.draft().lines() {
            out.push_str(&format!("> {}\n", draft_line));
        }
    }
    if thread.is_draft_empty() {
        out.push_str(&format!("[{}] (desabilitado)\n", PUBLISH_LABEL));
    } else {
        out.push_str(&format!("[{}]\n", PUBLISH_LABEL));
    }
    if let Some(message) = thread.validation() {
        out.push_str(&format!("! {}\n", message));
    }

    // Comment list
    out.push_str(&format!("\nComentários ({})\n", thread.comments().len()));
    for comment in thread.comments() {
        out.push_str(&format!("  • {}\n", comment));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Author;
    use crate::state::{ThreadAction, REQUIRED_MESSAGE, SEED_COMMENT};

    fn sample() -> (Post, DateTime<Utc>) {
        let post = Post {
            author: Author {
                name: "Ana Braga".to_string(),
                role: "Web Developer".to_string(),
                avatar_url: "https://example.com/ana.png".to_string(),
            },
            content: vec![
                ContentLine::Paragraph {
                    text: "A".to_string(),
                },
                ContentLine::Link {
                    text: "B".to_string(),
                },
                ContentLine::Unknown,
            ],
            published_at: DateTime::parse_from_rfc3339("2023-01-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let now = DateTime::parse_from_rfc3339("2023-01-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        (post, now)
    }

    #[test]
    fn content_kind_dispatch() {
        let (post, now) = sample();
        let card = format_card(&post, &CommentThread::new(), now);

        // Paragraph renders plain, link gets the placeholder href, and the
        // unrecognized line contributes nothing between the link and the form
        assert!(card.contains(&format!(
            "A\nB ({})\n\n{}\n",
            LINK_PLACEHOLDER, FORM_LABEL
        )));
    }

    #[test]
    fn header_carries_all_timestamp_forms() {
        let (post, now) = sample();
        let card = format_card(&post, &CommentThread::new(), now);

        assert!(card.contains("Ana Braga · Web Developer"));
        assert!(card.contains("há 30 minutos"));
        assert!(card.contains("1 de janeiro às 12:00h"));
        assert!(card.contains("2023-01-01T12:00:00Z"));
    }

    #[test]
    fn render_is_idempotent() {
        let (post, now) = sample();
        let mut thread = CommentThread::new();
        thread.apply(ThreadAction::InsertChar('x'));

        let first = format_card(&post, &thread, now);
        let second = format_card(&post, &thread, now);
        assert_eq!(first, second);
        // Rendering left the state untouched
        assert_eq!(thread.draft(), "x");
        assert_eq!(thread.comments(), [SEED_COMMENT]);
    }

    #[test]
    fn form_reflects_draft_and_validation() {
        let (post, now) = sample();
        let mut thread = CommentThread::new();

        let card = format_card(&post, &thread, now);
        assert!(card.contains(DRAFT_PLACEHOLDER));
        assert!(card.contains("(desabilitado)"));

        thread.apply(ThreadAction::Publish);
        let card = format_card(&post, &thread, now);
        assert!(card.contains(REQUIRED_MESSAGE));

        thread.apply(ThreadAction::InsertChar('o'));
        thread.apply(ThreadAction::InsertChar('i'));
        let card = format_card(&post, &thread, now);
        assert!(card.contains("> oi"));
        assert!(!card.contains("(desabilitado)"));
        assert!(!card.contains(REQUIRED_MESSAGE));
    }
}
