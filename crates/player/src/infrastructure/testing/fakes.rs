//! Counting fakes for the async ports.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::ports::outbound::{HttpResponse, HttpTransport, SleepPort, TransportError};

type Scripted = Result<HttpResponse, TransportError>;

/// Transport answering from scripted per-URL responses.
///
/// Queued responses are replayed in order; the last one sticks. Unknown URLs
/// answer 404. Every call is recorded.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, url: &str, body: Value) -> Self {
        self.push(url, Ok(HttpResponse::new(200, body.to_string())));
        self
    }

    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.push(url, Ok(HttpResponse::new(status, "")));
        self
    }

    pub fn with_error(self, url: &str, error: TransportError) -> Self {
        self.push(url, Err(error));
        self
    }

    pub fn push(&self, url: &str, response: Scripted) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.entry(url.to_string()).or_default().push_back(response);
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == url).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls().len()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_string());
        }

        let mut routes = self
            .routes
            .lock()
            .map_err(|_| TransportError::Request("fake poisoned".to_string()))?;
        match routes.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or_else(|| Ok(HttpResponse::new(404, ""))),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Ok(HttpResponse::new(404, ""))),
            None => Ok(HttpResponse::new(404, "")),
        }
    }
}

/// Sleep that returns immediately and records the requested delays.
#[derive(Default)]
pub struct InstantSleep {
    sleeps: Mutex<Vec<u64>>,
}

impl InstantSleep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> Vec<u64> {
        self.sleeps.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SleepPort for InstantSleep {
    async fn sleep_ms(&self, ms: u64) {
        if let Ok(mut sleeps) = self.sleeps.lock() {
            sleeps.push(ms);
        }
    }
}
