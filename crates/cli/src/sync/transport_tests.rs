// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the transport module.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::transport::{
    HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportError,
    TransportResult,
};
use crate::config::Config;
use serde_json::json;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// Mock transport for testing without real sockets.
///
/// Responses are replayed in order; every request is recorded.
#[derive(Clone, Default)]
pub struct MockTransport {
    /// Replies returned by execute(), oldest first.
    responses: Arc<Mutex<VecDeque<TransportResult<HttpResponse>>>>,
    /// Requests that were passed to execute().
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn queue_response(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a 200 response carrying `value` as JSON.
    pub fn queue_json(&self, value: serde_json::Value) {
        self.queue_response(200, value.to_string());
    }

    /// Queue a transport failure.
    pub fn queue_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get all requests that were executed.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = TransportResult<HttpResponse>> + Send + '_>> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::ConnectionFailed("no mock response".into())))
        })
    }
}

#[tokio::test]
async fn test_mock_transport_replays_in_order() {
    let transport = MockTransport::new();
    transport.queue_json(json!({"n": 1}));
    transport.queue_response(500, "boom");

    let first = transport
        .execute(HttpRequest::new(Method::Get, "/a"))
        .await
        .unwrap();
    assert_eq!(first, HttpResponse::new(200, r#"{"n":1}"#));

    let second = transport
        .execute(HttpRequest::new(Method::Post, "/b").with_body(json!({})))
        .await
        .unwrap();
    assert_eq!(second.status, 500);
    assert!(!second.is_success());

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].path, "/a");
    assert_eq!(requests[1].method, Method::Post);
}

#[tokio::test]
async fn test_mock_transport_without_responses_fails() {
    let transport = MockTransport::new();
    let result = transport.execute(HttpRequest::new(Method::Get, "/a")).await;
    assert!(matches!(result, Err(TransportError::ConnectionFailed(_))));
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn test_request_builder() {
    let request = HttpRequest::new(Method::Delete, "/ApiVisite.php")
        .with_bearer("abc123")
        .with_body(json!({"id_visite": 4}));
    assert_eq!(request.bearer.as_deref(), Some("abc123"));
    assert_eq!(request.body, Some(json!({"id_visite": 4})));
    assert_eq!(request.method.to_string(), "DELETE");
}

#[test]
fn test_response_success_range() {
    assert!(HttpResponse::new(200, "").is_success());
    assert!(HttpResponse::new(204, "").is_success());
    assert!(!HttpResponse::new(301, "").is_success());
    assert!(!HttpResponse::new(401, "").is_success());
}

#[test]
fn test_reqwest_transport_uses_trimmed_api_root() {
    let config = Config::default()
        .with_base_url(Some("http://127.0.0.1:9/API/".to_string()))
        .unwrap();
    let transport = ReqwestTransport::new(&config).unwrap();
    assert_eq!(transport.base_url(), "http://127.0.0.1:9/API");
}

#[tokio::test]
async fn test_reqwest_transport_unreachable_host_is_transport_error() {
    // Port 9 (discard) is closed on test machines.
    let config = Config {
        base_url: "http://127.0.0.1:9/API".to_string(),
        timeout_secs: Some(5),
    };
    let transport = ReqwestTransport::new(&config).unwrap();
    let result = transport
        .execute(HttpRequest::new(Method::Get, "/ApiVisite.php"))
        .await;
    assert!(matches!(
        result,
        Err(TransportError::ConnectionFailed(_))
            | Err(TransportError::RequestFailed(_))
            | Err(TransportError::Timeout)
    ));
}
