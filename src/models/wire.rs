//! JSON shapes exchanged with the API server.
//!
//! All bodies use camelCase. Every route except journal analysis wraps its
//! payload in an [`Envelope`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::community::{Comment, Post, Reply};

/// Accept ids encoded as either strings or integers.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer id")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// `{ success, data | error }` response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiPost {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub time_ago: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<ApiComment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiComment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub post_id: String,
    pub username: String,
    pub text: String,
    #[serde(default)]
    pub time_ago: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub replies: Vec<ApiReply>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiReply {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    pub text: String,
    #[serde(default)]
    pub time_ago: String,
    #[serde(default)]
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}

/// Identity returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthPayload {
    pub token: String,
    pub user: UserDescriptor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatePostRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// Body for comment and reply creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LikeRequest {
    pub liked: bool,
}

/// Root route greeting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Welcome {
    pub message: String,
}

/// Human-friendly age of a timestamp ("Just now", "5 minutes ago").
pub fn time_ago(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - created).num_seconds().max(0);
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", n, unit)
        }
    };
    match secs {
        0..=59 => "Just now".to_string(),
        60..=3_599 => plural(secs / 60, "minute"),
        3_600..=86_399 => plural(secs / 3_600, "hour"),
        _ => plural(secs / 86_400, "day"),
    }
}

impl From<ApiReply> for Reply {
    fn from(reply: ApiReply) -> Self {
        Reply {
            id: reply.id,
            author: reply.username,
            text: reply.text,
            timestamp: reply.created_at,
        }
    }
}

impl From<ApiComment> for Comment {
    fn from(comment: ApiComment) -> Self {
        Comment {
            id: comment.id,
            author: comment.username,
            text: comment.text,
            likes: comment.likes,
            liked: false,
            replies: comment.replies.into_iter().map(Reply::from).collect(),
            timestamp: comment.created_at,
        }
    }
}

impl From<ApiPost> for Post {
    fn from(post: ApiPost) -> Self {
        Post {
            id: post.id,
            author: post.username,
            message: post.message,
            mood: post.mood,
            likes: post.likes,
            liked: false,
            comments: post.comments.into_iter().map(Comment::from).collect(),
            timestamp: post.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now, now), "Just now");
        assert_eq!(time_ago(now - Duration::seconds(59), now), "Just now");
        assert_eq!(time_ago(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(time_ago(now - Duration::days(2), now), "2 days ago");
    }

    #[test]
    fn test_time_ago_future_is_just_now() {
        let now = Utc::now();
        assert_eq!(time_ago(now + Duration::minutes(10), now), "Just now");
    }

    #[test]
    fn test_envelope_skips_absent_fields() {
        let ok = serde_json::to_value(Envelope::ok(1)).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": 1}));

        let err = serde_json::to_value(Envelope::<()>::failure("Post not found")).unwrap();
        assert_eq!(
            err,
            serde_json::json!({"success": false, "error": "Post not found"})
        );
    }

    #[test]
    fn test_api_post_accepts_numeric_ids() {
        let json = r#"{
            "id": 7,
            "username": "Anonymous User",
            "message": "hello",
            "timeAgo": "Just now",
            "createdAt": "2024-05-01T10:00:00Z",
            "comments": [{
                "id": 9,
                "postId": 7,
                "username": "Anonymous User",
                "text": "nice",
                "createdAt": "2024-05-01T10:01:00Z"
            }]
        }"#;
        let post: ApiPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "7");
        assert_eq!(post.comments[0].post_id, "7");

        let local: Post = post.into();
        assert_eq!(local.author, "Anonymous User");
        assert_eq!(local.comments[0].text, "nice");
        assert!(!local.liked);
    }

    #[test]
    fn test_failure_envelope_decodes_without_data() {
        let envelope: Envelope<ApiPost> =
            serde_json::from_str(r#"{"success": false, "error": "Post not found"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("Post not found"));
    }
}
