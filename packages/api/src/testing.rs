//! Scripted transport and recording navigator for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::ApiError;
use crate::navigation::{NavMode, Navigate};
use crate::transport::{ApiRequest, HttpTransport, RawResponse};

/// Answers requests from a queue and records what was sent.
///
/// An empty queue answers with a transport error.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<Result<RawResponse, ApiError>>>>,
    sent: Arc<Mutex<Vec<ApiRequest>>>,
    in_flight: Arc<Mutex<Option<Box<dyn FnOnce() + Send>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::json(status, &body)));
    }

    pub fn respond_text(&self, status: u16, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::new(status, body)));
    }

    pub fn fail(&self, detail: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Transport(detail.to_string())));
    }

    /// Run `hook` while the next request is in flight, after it was sent
    /// and before its reply is returned.
    pub fn while_in_flight(&self, hook: impl FnOnce() + Send + 'static) {
        *self.in_flight.lock().unwrap() = Some(Box::new(hook));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.sent.lock().unwrap().push(request);
        let hook = self.in_flight.lock().unwrap().take();
        if let Some(hook) = hook {
            hook();
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_string())))
    }
}

/// Records every navigation instead of performing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<(String, NavMode)>>>,
    backs: Arc<Mutex<usize>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<(String, NavMode)> {
        self.visits.lock().unwrap().clone()
    }

    pub fn backs(&self) -> usize {
        *self.backs.lock().unwrap()
    }
}

impl Navigate for RecordingNavigator {
    fn navigate(&self, path: &str, mode: NavMode) {
        self.visits.lock().unwrap().push((path.to_string(), mode));
    }

    fn back(&self) {
        *self.backs.lock().unwrap() += 1;
    }
}
