//! Typed client for the MentalMuse API.
//!
//! Every call goes through an injected [`HttpClient`]. Failures are logged
//! with their technical detail and returned as [`NetworkError`] tagged with
//! the action that failed, so callers can show the generic message.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiAction, NetworkError};
use crate::models::journal::JournalAnalysis;
use crate::models::wire::{
    ApiComment, ApiPost, ApiReply, AuthPayload, CreatePostRequest, CredentialsRequest, Envelope,
    LikeRequest, TextRequest,
};
use crate::traits::{FilePart, HttpClient, HttpRequest, HttpResponse, RequestBody};

/// Default URL of a locally running server.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

pub struct ApiClient<C: HttpClient> {
    base_url: String,
    http: C,
    auth_token: Option<String>,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(http: C) -> Self {
        Self::with_base_url(http, DEFAULT_API_URL)
    }

    /// Create a client for a custom base URL (trailing slash ignored).
    pub fn with_base_url(http: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http,
            auth_token: None,
        }
    }

    /// Set the bearer token sent with every request.
    pub fn with_auth(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.auth_token = token;
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token, when there is one, and send.
    async fn send(&self, action: ApiAction, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let request = match self.auth_token {
            Some(ref token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        };
        self.http
            .send(request)
            .await
            .map_err(|e| unreachable_error(action, e))
    }

    async fn get<T: DeserializeOwned>(&self, action: ApiAction, path: &str) -> Result<T, NetworkError> {
        let response = self.send(action, HttpRequest::get(self.url(path))).await?;
        decode_envelope(action, &response)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        action: ApiAction,
        path: &str,
        body: &B,
    ) -> Result<T, NetworkError> {
        let body = serde_json::to_string(body).map_err(|e| NetworkError::InvalidResponse {
            action,
            message: format!("could not encode request: {}", e),
        })?;
        let request = HttpRequest::post(self.url(path), RequestBody::Json(body));
        let response = self.send(action, request).await?;
        decode_envelope(action, &response)
    }

    /// POST /auth/anonymous
    pub async fn login_anonymous(&self) -> Result<AuthPayload, NetworkError> {
        self.post(ApiAction::SignIn, "/auth/anonymous", &serde_json::json!({}))
            .await
    }

    /// POST /auth/login
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthPayload, NetworkError> {
        let body = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
            nickname: None,
        };
        self.post(ApiAction::SignIn, "/auth/login", &body).await
    }

    /// POST /auth/register
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        nickname: Option<&str>,
    ) -> Result<AuthPayload, NetworkError> {
        let body = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
            nickname: nickname.map(String::from),
        };
        self.post(ApiAction::Register, "/auth/register", &body).await
    }

    /// GET /posts
    pub async fn list_posts(&self) -> Result<Vec<ApiPost>, NetworkError> {
        self.get(ApiAction::LoadPosts, "/posts").await
    }

    /// POST /posts
    pub async fn create_post(&self, message: &str, mood: Option<&str>) -> Result<ApiPost, NetworkError> {
        let body = CreatePostRequest {
            message: message.to_string(),
            mood: mood.map(String::from),
        };
        self.post(ApiAction::CreatePost, "/posts", &body).await
    }

    /// POST /posts/:postId/comments
    pub async fn add_comment(&self, post_id: &str, text: &str) -> Result<ApiComment, NetworkError> {
        let path = format!("/posts/{}/comments", urlencoding::encode(post_id));
        let body = TextRequest {
            text: text.to_string(),
        };
        self.post(ApiAction::AddComment, &path, &body).await
    }

    /// POST /comments/:commentId/replies
    pub async fn add_reply(&self, comment_id: &str, text: &str) -> Result<ApiReply, NetworkError> {
        let path = format!("/comments/{}/replies", urlencoding::encode(comment_id));
        let body = TextRequest {
            text: text.to_string(),
        };
        self.post(ApiAction::AddReply, &path, &body).await
    }

    /// POST /posts/:postId/like
    pub async fn like_post(&self, post_id: &str, liked: bool) -> Result<ApiPost, NetworkError> {
        let path = format!("/posts/{}/like", urlencoding::encode(post_id));
        self.post(ApiAction::LikePost, &path, &LikeRequest { liked })
            .await
    }

    /// POST /journal/analyze (multipart field `audio`). The response is not
    /// enveloped.
    pub async fn analyze_audio(
        &self,
        audio: Bytes,
        file_name: &str,
        content_type: &str,
    ) -> Result<JournalAnalysis, NetworkError> {
        let action = ApiAction::AnalyzeAudio;
        let part = FilePart::new("audio", file_name, content_type, audio);
        let request = HttpRequest::post(self.url("/journal/analyze"), RequestBody::File(part));
        let response = self.send(action, request).await?;

        if !response.is_success() {
            let message = error_message(&response);
            tracing::warn!(action = action.as_str(), status = response.status, %message, "API call failed");
            return Err(NetworkError::HttpStatus {
                action,
                status: response.status,
                message,
            });
        }
        response.json().map_err(|e| invalid_response(action, e))
    }
}

fn unreachable_error(action: ApiAction, err: crate::traits::HttpError) -> NetworkError {
    tracing::warn!(action = action.as_str(), error = %err, "API unreachable");
    NetworkError::Unreachable {
        action,
        message: err.to_string(),
    }
}

fn invalid_response(action: ApiAction, err: serde_json::Error) -> NetworkError {
    tracing::warn!(action = action.as_str(), error = %err, "API response could not be decoded");
    NetworkError::InvalidResponse {
        action,
        message: err.to_string(),
    }
}

/// Best-effort error text: the envelope's `error`, else the raw body.
fn error_message(response: &HttpResponse) -> String {
    response
        .json::<Envelope<serde_json::Value>>()
        .ok()
        .and_then(|envelope| envelope.error)
        .or_else(|| response.text())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "Unknown error".to_string())
}

fn decode_envelope<T: DeserializeOwned>(action: ApiAction, response: &HttpResponse) -> Result<T, NetworkError> {
    if !response.is_success() {
        let message = error_message(response);
        tracing::warn!(action = action.as_str(), status = response.status, %message, "API call failed");
        return Err(NetworkError::HttpStatus {
            action,
            status: response.status,
            message,
        });
    }

    let envelope: Envelope<T> = response.json().map_err(|e| invalid_response(action, e))?;
    if !envelope.success {
        let message = envelope.error.unwrap_or_else(|| "Unknown error".to_string());
        tracing::warn!(action = action.as_str(), %message, "API rejected request");
        return Err(NetworkError::Rejected { action, message });
    }
    envelope.data.ok_or_else(|| NetworkError::InvalidResponse {
        action,
        message: "missing data".to_string(),
    })
}
