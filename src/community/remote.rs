//! Community board backed by the API server.

use std::collections::BTreeSet;

use crate::client::ApiClient;
use crate::error::NetworkError;
use crate::models::community::{Comment, Post, Reply};
use crate::traits::HttpClient;

/// Client-side cache of the server's feed.
///
/// Like state is local: the server only tracks counts, so the ids of liked
/// posts are kept here and reapplied on every refresh. Callers that outlive
/// one instance save [`RemoteCommunity::liked`] and seed the next one with
/// [`RemoteCommunity::with_liked`].
pub struct RemoteCommunity<C: HttpClient> {
    client: ApiClient<C>,
    posts: Vec<Post>,
    liked: BTreeSet<String>,
}

impl<C: HttpClient> RemoteCommunity<C> {
    pub fn new(client: ApiClient<C>) -> Self {
        Self::with_liked(client, BTreeSet::new())
    }

    pub fn with_liked(client: ApiClient<C>, liked: BTreeSet<String>) -> Self {
        Self {
            client,
            posts: Vec::new(),
            liked,
        }
    }

    /// Ids of posts liked from this device.
    pub fn liked(&self) -> &BTreeSet<String> {
        &self.liked
    }

    pub fn client(&self) -> &ApiClient<C> {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut ApiClient<C> {
        &mut self.client
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Replace the cache with the server's feed.
    pub async fn refresh(&mut self) -> Result<&[Post], NetworkError> {
        let posts = self.client.list_posts().await?;
        self.posts = posts
            .into_iter()
            .map(|api| {
                let mut post = Post::from(api);
                post.liked = self.liked.contains(&post.id);
                post
            })
            .collect();
        tracing::debug!(count = self.posts.len(), "feed refreshed");
        Ok(&self.posts)
    }

    pub async fn create_post(
        &mut self,
        message: &str,
        mood: Option<&str>,
    ) -> Result<Option<Post>, NetworkError> {
        let message = message.trim();
        if message.is_empty() {
            return Ok(None);
        }
        let mood = mood.map(str::trim).filter(|m| !m.is_empty());
        let post = Post::from(self.client.create_post(message, mood).await?);
        self.posts.insert(0, post.clone());
        Ok(Some(post))
    }

    pub async fn add_comment(
        &mut self,
        post_id: &str,
        text: &str,
    ) -> Result<Option<Comment>, NetworkError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let comment = Comment::from(self.client.add_comment(post_id, text).await?);
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
            post.comments.push(comment.clone());
        }
        Ok(Some(comment))
    }

    /// Reply to a comment. `post_id` only locates the cached thread.
    pub async fn add_reply(
        &mut self,
        post_id: &str,
        comment_id: &str,
        text: &str,
    ) -> Result<Option<Reply>, NetworkError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let reply = Reply::from(self.client.add_reply(comment_id, text).await?);
        let cached = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .and_then(|p| p.comments.iter_mut().find(|c| c.id == comment_id));
        if let Some(comment) = cached {
            comment.replies.push(reply.clone());
        }
        Ok(Some(reply))
    }

    pub async fn toggle_like(&mut self, post_id: &str) -> Result<Post, NetworkError> {
        let liked = !self.liked.contains(post_id);
        let api = self.client.like_post(post_id, liked).await?;

        if liked {
            self.liked.insert(post_id.to_string());
        } else {
            self.liked.remove(post_id);
        }
        let mut post = Post::from(api);
        post.liked = liked;

        match self.posts.iter_mut().find(|p| p.id == post_id) {
            Some(cached) => *cached = post.clone(),
            None => self.posts.insert(0, post.clone()),
        }
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::error::ApiAction;
    use crate::traits::HttpError;
    use serde_json::json;

    const BASE: &str = "http://api.test/api";

    fn api_post(id: &str, likes: u32) -> serde_json::Value {
        json!({
            "id": id, "username": "Anonymous User", "message": "test",
            "likes": likes, "timeAgo": "Just now",
            "createdAt": "2024-05-01T10:00:00Z", "comments": []
        })
    }

    fn remote(http: &MockHttpClient) -> RemoteCommunity<MockHttpClient> {
        RemoteCommunity::new(ApiClient::with_base_url(http.clone(), BASE))
    }

    #[tokio::test]
    async fn test_blank_inputs_skip_network() {
        let http = MockHttpClient::new();
        let mut community = remote(&http);
        assert_eq!(community.create_post("   ", None).await.unwrap(), None);
        assert_eq!(community.add_comment("p1", "").await.unwrap(), None);
        assert_eq!(community.add_reply("p1", "c1", " ").await.unwrap(), None);
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_failure_is_generic() {
        let http = MockHttpClient::new();
        http.mock_fallback(MockResponse::Fail(HttpError::ConnectionFailed(
            "refused".into(),
        )));
        let mut community = remote(&http);
        let err = community.refresh().await.unwrap_err();
        assert_eq!(err.action(), ApiAction::LoadPosts);
        assert_eq!(err.user_message(), "Failed to load posts");
    }

    #[tokio::test]
    async fn test_toggle_like_tracks_local_state() {
        let http = MockHttpClient::new();
        http.mock_route(
            "http://api.test/api/posts",
            MockResponse::json(200, json!({"success": true, "data": [api_post("p1", 0)]})),
        );
        let mut community = remote(&http);
        community.refresh().await.unwrap();

        http.mock_route(
            "http://api.test/api/posts/p1/like",
            MockResponse::json(200, json!({"success": true, "data": api_post("p1", 1)})),
        );
        let post = community.toggle_like("p1").await.unwrap();
        assert!(post.liked);
        assert_eq!(post.likes, 1);
        assert_eq!(
            http.requests().last().unwrap().json_body(),
            Some(r#"{"liked":true}"#)
        );

        // Refresh keeps the local like flag
        community.refresh().await.unwrap();
        assert!(community.post("p1").unwrap().liked);

        http.mock_route(
            "http://api.test/api/posts/p1/like",
            MockResponse::json(200, json!({"success": true, "data": api_post("p1", 0)})),
        );
        let post = community.toggle_like("p1").await.unwrap();
        assert!(!post.liked);
        assert_eq!(post.likes, 0);
    }

    #[tokio::test]
    async fn test_seeded_like_state_unlikes() {
        let http = MockHttpClient::new();
        http.mock_route(
            "http://api.test/api/posts",
            MockResponse::json(200, json!({"success": true, "data": [api_post("p1", 1)]})),
        );
        http.mock_route(
            "http://api.test/api/posts/p1/like",
            MockResponse::json(200, json!({"success": true, "data": api_post("p1", 0)})),
        );
        let liked = BTreeSet::from(["p1".to_string()]);
        let mut community =
            RemoteCommunity::with_liked(ApiClient::with_base_url(http.clone(), BASE), liked);

        community.refresh().await.unwrap();
        assert!(community.post("p1").unwrap().liked);

        let post = community.toggle_like("p1").await.unwrap();
        assert!(!post.liked);
        assert_eq!(
            http.requests().last().unwrap().json_body(),
            Some(r#"{"liked":false}"#)
        );
        assert!(community.liked().is_empty());
    }
}
