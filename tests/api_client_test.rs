//! ApiClient over real HTTP against a mock server.

use bytes::Bytes;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mentalmuse::adapters::ReqwestHttpClient;
use mentalmuse::client::ApiClient;
use mentalmuse::error::{ApiAction, NetworkError};

fn client(server: &MockServer) -> ApiClient<ReqwestHttpClient> {
    ApiClient::with_base_url(ReqwestHttpClient::new(), format!("{}/api/", server.uri()))
}

fn post_json(id: serde_json::Value, likes: u32) -> serde_json::Value {
    json!({
        "id": id,
        "username": "Anonymous User",
        "message": "hello",
        "likes": likes,
        "timeAgo": "Just now",
        "createdAt": "2026-01-01T00:00:00Z",
        "comments": []
    })
}

#[tokio::test]
async fn test_list_posts_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(header("authorization", "Bearer jwt-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [post_json(json!(7), 2)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let posts = client(&server).with_auth("jwt-123").list_posts().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "7");
    assert_eq!(posts[0].likes, 2);
}

#[tokio::test]
async fn test_server_error_maps_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "error": "database exploded"
        })))
        .mount(&server)
        .await;

    let err = client(&server).create_post("hello", None).await.unwrap_err();
    assert_eq!(err.action(), ApiAction::CreatePost);
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), "Failed to create post");
    assert!(err.to_string().contains("database exploded"));
}

#[tokio::test]
async fn test_rejected_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts/1/like"))
        .and(body_json(json!({"liked": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "nope"
        })))
        .mount(&server)
        .await;

    let err = client(&server).like_post("1", true).await.unwrap_err();
    assert!(matches!(err, NetworkError::Rejected { action: ApiAction::LikePost, .. }));
    assert_eq!(err.user_message(), "Failed to like post");
}

#[tokio::test]
async fn test_unreachable_server() {
    let client = ApiClient::with_base_url(ReqwestHttpClient::new(), "http://127.0.0.1:9/api");
    let err = client.list_posts().await.unwrap_err();
    assert!(matches!(err, NetworkError::Unreachable { .. }));
    assert_eq!(err.user_message(), "Failed to load posts");
}

#[tokio::test]
async fn test_anonymous_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/anonymous"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"token": "tok", "user": {"id": "anon_1", "isAnonymous": true}}
        })))
        .mount(&server)
        .await;

    let payload = client(&server).login_anonymous().await.unwrap();
    assert_eq!(payload.token, "tok");
    assert!(payload.user.is_anonymous);
    assert_eq!(payload.user.id.as_deref(), Some("anon_1"));
}

#[tokio::test]
async fn test_analyze_audio_flat_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/journal/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transcript": "Your transcribed text",
            "mood": "anxious",
            "suggestions": [{
                "type": "book",
                "title": "The Anxiety Toolkit",
                "description": "Practical strategies for managing anxiety"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let analysis = client(&server)
        .analyze_audio(Bytes::from_static(b"RIFF"), "journal.wav", "audio/wav")
        .await
        .unwrap();
    assert_eq!(analysis.mood, "anxious");
    assert_eq!(analysis.suggestions[0].title, "The Anxiety Toolkit");
}
