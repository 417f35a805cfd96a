//! Scripted HTTP client for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub enum MockResponse {
    Reply(HttpResponse),
    Fail(HttpError),
}

impl MockResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        MockResponse::Reply(HttpResponse::new(status, body.to_string()))
    }
}

#[derive(Debug, Default)]
struct Script {
    routes: Vec<(String, MockResponse)>,
    fallback: Option<MockResponse>,
    sent: Vec<HttpRequest>,
}

impl Script {
    /// The route with the longest URL prefix wins; later routes replace
    /// earlier ones with the same prefix.
    fn answer(&self, url: &str) -> Option<MockResponse> {
        self.routes
            .iter()
            .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, response)| response.clone())
            .or_else(|| self.fallback.clone())
    }
}

/// Clones share one script, so a test can keep a handle after moving the
/// client into an `ApiClient`.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests whose URL starts with `prefix`.
    pub fn mock_route(&self, prefix: &str, response: MockResponse) {
        let mut script = self.script.lock().unwrap();
        script.routes.retain(|(existing, _)| existing != prefix);
        script.routes.push((prefix.to_string(), response));
    }

    /// Answer anything no route matches.
    pub fn mock_fallback(&self, response: MockResponse) {
        self.script.lock().unwrap().fallback = Some(response);
    }

    /// Requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.lock().unwrap().sent.clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut script = self.script.lock().unwrap();
        let answer = script.answer(&request.url);
        let url = request.url.clone();
        script.sent.push(request);

        match answer {
            Some(MockResponse::Reply(response)) => Ok(response),
            Some(MockResponse::Fail(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock for {}", url))),
        }
    }
}
