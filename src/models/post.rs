use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::Comment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Attachment reference. The URI is opaque and never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub kind: MediaKind,
    pub uri: String,
}

impl Media {
    pub fn image(uri: impl Into<String>) -> Self {
        Media { kind: MediaKind::Image, uri: uri.into() }
    }

    pub fn video(uri: impl Into<String>) -> Self {
        Media { kind: MediaKind::Video, uri: uri.into() }
    }
}

/// A project update in the posts feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: String,
    pub content: String,
    pub media: Vec<Media>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.media_of(MediaKind::Image)
    }

    pub fn videos(&self) -> impl Iterator<Item = &str> {
        self.media_of(MediaKind::Video)
    }

    fn media_of(&self, kind: MediaKind) -> impl Iterator<Item = &str> {
        self.media
            .iter()
            .filter(move |m| m.kind == kind)
            .map(|m| m.uri.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_accessors_split_by_kind_in_order() {
        let post = Post {
            id: "1".to_string(),
            author: "Priya Sharma".to_string(),
            content: "Demo".to_string(),
            media: vec![
                Media::image("a.png"),
                Media::video("clip.mp4"),
                Media::image("b.png"),
            ],
            comments: Vec::new(),
            created_at: Utc::now(),
        };

        assert_eq!(post.images().collect::<Vec<_>>(), vec!["a.png", "b.png"]);
        assert_eq!(post.videos().collect::<Vec<_>>(), vec!["clip.mp4"]);
    }
}
