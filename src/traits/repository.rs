//! Server-side post repository abstraction.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::wire::{ApiComment, ApiPost, ApiReply};

/// Repository failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

/// Storage for community posts, comments and replies as served by the API.
///
/// `list_posts` returns posts newest first with comments (and their replies)
/// joined in.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<ApiPost>, RepositoryError>;

    async fn get_post(&self, post_id: &str) -> Result<Option<ApiPost>, RepositoryError>;

    /// Store a new post.
    async fn create_post(&self, post: ApiPost) -> Result<ApiPost, RepositoryError>;

    /// Attach a comment to an existing post.
    async fn add_comment(
        &self,
        post_id: &str,
        comment: ApiComment,
    ) -> Result<ApiComment, RepositoryError>;

    /// Attach a reply to an existing comment, wherever it lives.
    async fn add_reply(&self, comment_id: &str, reply: ApiReply)
        -> Result<ApiReply, RepositoryError>;

    /// Adjust a post's like count by `delta`, saturating at zero.
    async fn adjust_likes(&self, post_id: &str, delta: i64) -> Result<ApiPost, RepositoryError>;
}
