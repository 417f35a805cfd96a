//! HTTP transport seam.
//!
//! The API client builds [`HttpRequest`] values and hands them to an
//! [`HttpClient`]; tests swap in [`crate::adapters::MockHttpClient`] or point
//! the reqwest adapter at a wiremock server.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

pub type Headers = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A single file field in a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    /// File name reported to the server
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl FilePart {
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Serialized JSON, sent as `application/json`
    Json(String),
    /// A one-file `multipart/form-data` form
    File(FilePart),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Headers::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn post(url: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: Headers::new(),
            body,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_string(), value.into());
        self
    }

    /// Header value by case-insensitive name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json_body(&self) -> Option<&str> {
        match &self.body {
            RequestBody::Json(json) => Some(json),
            _ => None,
        }
    }

    pub fn file(&self) -> Option<&FilePart> {
        match &self.body {
            RequestBody::File(part) => Some(part),
            _ => None,
        }
    }
}

/// Status and body of a completed exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> Option<String> {
        String::from_utf8(self.body.to_vec()).ok()
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport failures. HTTP error statuses are not errors at this layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("HTTP error: {0}")]
    Other(String),
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform one request. Non-2xx statuses come back as `Ok`.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ranges() {
        assert!(HttpResponse::new(201, Bytes::new()).is_success());
        assert!(!HttpResponse::new(404, Bytes::new()).is_success());
        assert!(!HttpResponse::new(500, Bytes::new()).is_success());
    }

    #[test]
    fn test_request_accessors() {
        let request = HttpRequest::post("http://x/posts", RequestBody::Json("{}".into()))
            .header("Authorization", "Bearer t");
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(request.header_value("authorization"), Some("Bearer t"));
        assert_eq!(request.json_body(), Some("{}"));
        assert!(request.file().is_none());

        let part = FilePart::new("audio", "a.wav", "audio/wav", vec![1u8, 2, 3]);
        let upload = HttpRequest::post("http://x/analyze", RequestBody::File(part.clone()));
        assert_eq!(upload.file(), Some(&part));
        assert_eq!(upload.json_body(), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".into()).to_string(),
            "Connection failed: refused"
        );
        assert_eq!(HttpError::Other("x".into()).to_string(), "HTTP error: x");
    }
}
