//! A scripted [`Transport`] for exercising the client without a network
//!
//! ```ignore
//! let mock = MockTransport::new().with(Exchange::json(200, r#"{"data":{"banks":[]}}"#));
//! let service = BankService::with_transport(&config, mock)?;
//! service.get_banks().await?;
//! assert_eq!(service.transport().requests()[0].url.path(), "/bank");
//! ```

use crate::error::TransportError;
use crate::transport::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One canned reply
#[derive(Debug, Clone)]
pub enum Exchange {
    Respond(HttpResponse),
    Fail(String),
}

impl Exchange {
    /// Reply with `status` and a JSON (or any text) body
    pub fn json(status: u16, body: &str) -> Self {
        Self::bytes(status, body.as_bytes().to_vec())
    }

    pub fn bytes(status: u16, body: Vec<u8>) -> Self {
        Self::Respond(HttpResponse { status, body })
    }

    /// Produce no response at all
    pub fn fail(reason: impl Into<String>) -> Self {
        Self::Fail(reason.into())
    }
}

/// Answers requests from a FIFO of [`Exchange`]s and records every request
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Exchange>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply
    pub fn with(self, exchange: Exchange) -> Self {
        self.push(exchange);
        self
    }

    pub fn push(&self, exchange: Exchange) {
        lock(&self.replies).push_back(exchange);
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = request.method;
        let path = request.url.path().to_string();
        lock(&self.requests).push(request);

        match lock(&self.replies).pop_front() {
            Some(Exchange::Respond(response)) => Ok(response),
            Some(Exchange::Fail(reason)) => Err(TransportError::Unavailable(reason)),
            None => Err(TransportError::Unavailable(format!(
                "no scripted reply for {method} {path}"
            ))),
        }
    }
}
