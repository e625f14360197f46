// Post data model
//
// A post is the read-only input of the application: author, body content
// and publication timestamp. It is supplied by the caller (a JSON file or
// the built-in sample) and never mutated while the card is mounted.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Target of rendered link lines.
///
/// The source material never derives the destination from the line text,
/// so every link points at this placeholder. Reproduced as-is rather than
/// guessed at.
pub const LINK_PLACEHOLDER: &str = "#";

/// Who wrote the post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    /// Source string for the avatar; purely presentational, never fetched
    pub avatar_url: String,
}

/// One unit of the post body, tagged as paragraph or link
///
/// Unrecognized tags deserialize into `Unknown` and render nothing - a
/// silent no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentLine {
    Paragraph { text: String },
    Link { text: String },
    #[serde(other)]
    Unknown,
}

/// A post as rendered by the card: author header, ordered body, timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub author: Author,
    pub content: Vec<ContentLine>,
    pub published_at: DateTime<Utc>,
}

impl Post {
    /// Load a post from a JSON file
    ///
    /// All fields are required; a file missing `author`, `content` or
    /// `published_at` is rejected by serde.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read post file {}", path.display()))?;
        let post: Post = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse post file {}", path.display()))?;
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_line_tags_parse() {
        let line: ContentLine =
            serde_json::from_str(r#"{"kind": "paragraph", "text": "Fala galera"}"#).unwrap();
        assert_eq!(
            line,
            ContentLine::Paragraph {
                text: "Fala galera".to_string()
            }
        );

        let line: ContentLine =
            serde_json::from_str(r#"{"kind": "link", "text": "jane.design"}"#).unwrap();
        assert_eq!(
            line,
            ContentLine::Link {
                text: "jane.design".to_string()
            }
        );
    }

    #[test]
    fn unrecognized_tag_is_not_an_error() {
        let line: ContentLine =
            serde_json::from_str(r#"{"kind": "video", "text": "clip.mp4"}"#).unwrap();
        assert_eq!(line, ContentLine::Unknown);
    }

    #[test]
    fn post_requires_all_fields() {
        let missing_timestamp = r#"{
            "author": {"name": "Ana", "role": "Dev", "avatar_url": ""},
            "content": []
        }"#;
        assert!(serde_json::from_str::<Post>(missing_timestamp).is_err());
    }

    #[test]
    fn post_round_trips_through_json() {
        let json = r#"{
            "author": {"name": "Ana Braga", "role": "Web Developer", "avatar_url": "https://example.com/a.png"},
            "content": [
                {"kind": "paragraph", "text": "Fala galeraa"},
                {"kind": "link", "text": "jane.design/doctorcare"}
            ],
            "published_at": "2023-01-01T12:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.author.name, "Ana Braga");
        assert_eq!(post.content.len(), 2);
        assert_eq!(post.published_at.to_rfc3339(), "2023-01-01T12:00:00+00:00");
    }
}
