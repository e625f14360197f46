// Built-in sample post
//
// Used when no post file is given on the command line, so the card renders
// something meaningful out of the box.

use crate::post::{Author, ContentLine, Post};
use chrono::{TimeZone, Utc};

/// The post shown when `--post` is not supplied
pub fn sample_post() -> Post {
    Post {
        author: Author {
            name: "Ana Braga".to_string(),
            role: "Web Developer".to_string(),
            avatar_url: "https://github.com/anabraga.png".to_string(),
        },
        content: vec![
            ContentLine::Paragraph {
                text: "Fala galeraa 👋".to_string(),
            },
            ContentLine::Paragraph {
                text: "Acabei de subir mais um projeto no meu portifa. É um projeto \
                       que fiz no NLW Return, evento da Rocketseat. O nome do projeto \
                       é DoctorCare 🚀"
                    .to_string(),
            },
            ContentLine::Link {
                text: "jane.design/doctorcare".to_string(),
            },
        ],
        published_at: Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap(),
    }
}
