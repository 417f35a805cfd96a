//! In-memory post repository used by the API server.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::wire::{time_ago, ApiComment, ApiPost, ApiReply};
use crate::traits::{PostRepository, RepositoryError};

/// Posts held in process memory, newest first. Lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<ApiPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

/// Recompute relative ages for presentation.
fn refresh_ages(mut post: ApiPost) -> ApiPost {
    let now = Utc::now();
    post.time_ago = time_ago(post.created_at, now);
    for comment in &mut post.comments {
        comment.time_ago = time_ago(comment.created_at, now);
        for reply in &mut comment.replies {
            reply.time_ago = time_ago(reply.created_at, now);
        }
    }
    post
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_posts(&self) -> Result<Vec<ApiPost>, RepositoryError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().cloned().map(refresh_ages).collect())
    }

    async fn get_post(&self, post_id: &str) -> Result<Option<ApiPost>, RepositoryError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
            .map(refresh_ages))
    }

    async fn create_post(&self, post: ApiPost) -> Result<ApiPost, RepositoryError> {
        let mut posts = self.posts.write().await;
        posts.insert(0, post.clone());
        tracing::debug!(post_id = %post.id, total = posts.len(), "post stored");
        Ok(post)
    }

    async fn add_comment(
        &self,
        post_id: &str,
        comment: ApiComment,
    ) -> Result<ApiComment, RepositoryError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(RepositoryError::PostNotFound)?;
        post.comments.push(comment.clone());
        Ok(comment)
    }

    async fn add_reply(
        &self,
        comment_id: &str,
        reply: ApiReply,
    ) -> Result<ApiReply, RepositoryError> {
        let mut posts = self.posts.write().await;
        let comment = posts
            .iter_mut()
            .flat_map(|p| p.comments.iter_mut())
            .find(|c| c.id == comment_id)
            .ok_or(RepositoryError::CommentNotFound)?;
        comment.replies.push(reply.clone());
        Ok(reply)
    }

    async fn adjust_likes(&self, post_id: &str, delta: i64) -> Result<ApiPost, RepositoryError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(RepositoryError::PostNotFound)?;
        let likes = (i64::from(post.likes) + delta).max(0);
        post.likes = u32::try_from(likes).unwrap_or(u32::MAX);
        Ok(refresh_ages(post.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn post(id: &str) -> ApiPost {
        ApiPost {
            id: id.to_string(),
            username: "Anonymous User".to_string(),
            message: format!("message {}", id),
            mood: None,
            likes: 0,
            time_ago: String::new(),
            created_at: Utc::now(),
            comments: Vec::new(),
        }
    }

    fn comment(id: &str, post_id: &str) -> ApiComment {
        ApiComment {
            id: id.to_string(),
            post_id: post_id.to_string(),
            username: "Anonymous User".to_string(),
            text: "nice".to_string(),
            time_ago: String::new(),
            likes: 0,
            replies: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn reply(id: &str) -> ApiReply {
        ApiReply {
            id: id.to_string(),
            username: "Anonymous User".to_string(),
            text: "thanks".to_string(),
            time_ago: String::new(),
            likes: 0,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_newest_first() {
        let repo = InMemoryPostRepository::new();
        repo.create_post(post("a")).await.unwrap();
        repo.create_post(post("b")).await.unwrap();

        let ids: Vec<_> = repo
            .list_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_comment_and_reply_join() {
        let repo = InMemoryPostRepository::new();
        repo.create_post(post("p")).await.unwrap();
        repo.add_comment("p", comment("c", "p")).await.unwrap();
        repo.add_reply("c", reply("r")).await.unwrap();

        let stored = repo.get_post("p").await.unwrap().unwrap();
        assert_eq!(stored.comments.len(), 1);
        assert_eq!(stored.comments[0].replies[0].text, "thanks");
        assert_eq!(stored.time_ago, "Just now");
    }

    #[tokio::test]
    async fn test_missing_targets() {
        let repo = InMemoryPostRepository::new();
        assert_eq!(
            repo.add_comment("nope", comment("c", "nope")).await,
            Err(RepositoryError::PostNotFound)
        );
        assert_eq!(
            repo.add_reply("nope", reply("r")).await,
            Err(RepositoryError::CommentNotFound)
        );
        assert_eq!(repo.get_post("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_likes_saturate_at_zero() {
        let repo = InMemoryPostRepository::new();
        repo.create_post(post("p")).await.unwrap();
        assert_eq!(repo.adjust_likes("p", 1).await.unwrap().likes, 1);
        assert_eq!(repo.adjust_likes("p", -1).await.unwrap().likes, 0);
        assert_eq!(repo.adjust_likes("p", -1).await.unwrap().likes, 0);
    }

    #[tokio::test]
    async fn test_ages_refreshed_on_read() {
        let repo = InMemoryPostRepository::new();
        let mut old = post("old");
        old.created_at = Utc::now() - Duration::hours(2);
        repo.create_post(old).await.unwrap();
        let listed = repo.list_posts().await.unwrap();
        assert_eq!(listed[0].time_ago, "2 hours ago");
    }
}
