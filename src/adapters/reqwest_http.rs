//! [`HttpClient`] over reqwest.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{HttpClient, HttpError, HttpRequest, HttpResponse, Method, RequestBody};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn transport_error(err: reqwest::Error) -> HttpError {
    let message = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(message)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(message)
    } else if err.is_builder() {
        HttpError::InvalidUrl(message)
    } else {
        HttpError::Other(message)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(json) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(json),
            RequestBody::File(part) => {
                let file = reqwest::multipart::Part::bytes(part.data.to_vec())
                    .file_name(part.file_name)
                    .mime_str(&part.content_type)
                    .map_err(|e| HttpError::InvalidBody(e.to_string()))?;
                builder.multipart(reqwest::multipart::Form::new().part(part.field, file))
            }
        };

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;
        tracing::trace!(method = request.method.as_str(), url = %request.url, status, "http exchange");
        Ok(HttpResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FilePart;

    #[tokio::test]
    async fn test_invalid_url() {
        let result = ReqwestHttpClient::new()
            .send(HttpRequest::get("not-a-valid-url"))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let request = HttpRequest::post(
            "http://127.0.0.1:59999/api/posts",
            RequestBody::Json("{}".into()),
        );
        let result = ReqwestHttpClient::new().send(request).await;
        assert!(matches!(
            result,
            Err(HttpError::ConnectionFailed(_)) | Err(HttpError::Other(_))
        ));
    }

    #[tokio::test]
    async fn test_bad_mime_rejected_before_sending() {
        let part = FilePart::new("audio", "a.wav", "not a mime type\n", vec![0u8]);
        let request = HttpRequest::post(
            "http://127.0.0.1:59999/api/journal/analyze",
            RequestBody::File(part),
        );
        let result = ReqwestHttpClient::new().send(request).await;
        assert!(matches!(result, Err(HttpError::InvalidBody(_))));
    }
}
