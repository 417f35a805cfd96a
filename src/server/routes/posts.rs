//! Post, comment, reply and like handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::models::community::ANONYMOUS_AUTHOR;
use crate::models::wire::{
    ApiComment, ApiPost, ApiReply, CreatePostRequest, Envelope, LikeRequest, TextRequest,
};
use crate::server::{error::ApiError, state::AppState};

type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

const JUST_NOW: &str = "Just now";

fn required_text(text: &str, field: &str) -> Result<String, ApiError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest(format!("{} is required", field)));
    }
    Ok(text.to_string())
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<ApiPost>> {
    let posts = state.posts.list_posts().await?;
    Ok(Json(Envelope::ok(posts)))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> ApiResult<ApiPost> {
    let Json(request) = payload?;
    let message = required_text(&request.message, "Message")?;
    let mood = request
        .mood
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    let post = ApiPost {
        id: Uuid::new_v4().to_string(),
        username: ANONYMOUS_AUTHOR.to_string(),
        message,
        mood,
        likes: 0,
        time_ago: JUST_NOW.to_string(),
        created_at: Utc::now(),
        comments: Vec::new(),
    };
    let post = state.posts.create_post(post).await?;
    tracing::info!(post_id = %post.id, "post created");
    Ok(Json(Envelope::ok(post)))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> ApiResult<ApiComment> {
    let Json(request) = payload?;
    let text = required_text(&request.text, "Text")?;

    let comment = ApiComment {
        id: Uuid::new_v4().to_string(),
        post_id: post_id.clone(),
        username: ANONYMOUS_AUTHOR.to_string(),
        text,
        time_ago: JUST_NOW.to_string(),
        likes: 0,
        replies: Vec::new(),
        created_at: Utc::now(),
    };
    let comment = state.posts.add_comment(&post_id, comment).await?;
    tracing::info!(%post_id, comment_id = %comment.id, "comment added");
    Ok(Json(Envelope::ok(comment)))
}

pub async fn add_reply(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> ApiResult<ApiReply> {
    let Json(request) = payload?;
    let text = required_text(&request.text, "Text")?;

    let reply = ApiReply {
        id: Uuid::new_v4().to_string(),
        username: ANONYMOUS_AUTHOR.to_string(),
        text,
        time_ago: JUST_NOW.to_string(),
        likes: 0,
        created_at: Utc::now(),
    };
    let reply = state.posts.add_reply(&comment_id, reply).await?;
    tracing::info!(%comment_id, reply_id = %reply.id, "reply added");
    Ok(Json(Envelope::ok(reply)))
}

/// `{"liked": true}` adds a like, `{"liked": false}` removes one.
pub async fn like(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    payload: Result<Json<LikeRequest>, JsonRejection>,
) -> ApiResult<ApiPost> {
    let Json(request) = payload?;
    let delta = if request.liked { 1 } else { -1 };
    let post = state.posts.adjust_likes(&post_id, delta).await?;
    tracing::debug!(%post_id, likes = post.likes, "likes adjusted");
    Ok(Json(Envelope::ok(post)))
}
