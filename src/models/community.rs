use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author name for posts made while anonymous.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous User";

/// Author name for posts made with anonymity switched off.
pub const NAMED_AUTHOR: &str = "User";

/// A community post with its comment thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: String,
    pub message: String,
    /// Mood label the post was tagged with, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default)]
    pub likes: u32,
    /// Whether the local user has liked this post
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub timestamp: DateTime<Utc>,
}

impl Post {
    pub fn new(author: impl Into<String>, message: impl Into<String>, mood: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            message: message.into(),
            mood,
            likes: 0,
            liked: false,
            comments: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    /// Flip the local like state, keeping `likes` in step.
    pub fn toggle_like(&mut self) {
        if self.liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.liked = !self.liked;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub replies: Vec<Reply>,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            text: text.into(),
            likes: 0,
            liked: false,
            replies: Vec::new(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub author: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Reply {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_defaults() {
        let post = Post::new(ANONYMOUS_AUTHOR, "hello", None);
        assert_eq!(post.likes, 0);
        assert!(!post.liked);
        assert!(post.comments.is_empty());
        assert!(Uuid::parse_str(&post.id).is_ok());
    }

    #[test]
    fn test_toggle_like_round_trip() {
        let mut post = Post::new(ANONYMOUS_AUTHOR, "hello", None);
        post.toggle_like();
        assert_eq!((post.likes, post.liked), (1, true));
        post.toggle_like();
        assert_eq!((post.likes, post.liked), (0, false));
    }

    #[test]
    fn test_camel_case_serialization() {
        let post = Post::new("User", "hi", Some("😊 Happy".to_string()));
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["author"], "User");
        assert_eq!(json["mood"], "😊 Happy");
        assert!(json.get("comments").is_some());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "id": "p1",
            "author": "User",
            "message": "hi",
            "timestamp": "2024-01-01T00:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.mood, None);
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
    }
}
