//! Route table for `/api`.

pub mod auth;
pub mod journal;
pub mod posts;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use super::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/auth/anonymous", post(auth::anonymous))
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/posts", get(posts::list).post(posts::create))
        .route("/posts/:post_id/comments", post(posts::add_comment))
        .route("/posts/:post_id/like", post(posts::like))
        .route("/comments/:comment_id/replies", post(posts::add_reply))
        .route(
            "/journal/analyze",
            post(journal::analyze).layer(DefaultBodyLimit::max(journal::MAX_AUDIO_BYTES)),
        )
}
