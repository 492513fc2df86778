//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use super::client::{ApiRequest, ApiResponse, Transport};
use super::error::ApiError;
use crate::state::toasts::{ToastKind, ToastState};

/// Replays queued results in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    pub requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn replying(status: u16, body: Value) -> Self {
        let transport = Self::default();
        transport.push_reply(status, body);
        transport
    }

    pub fn failing(err: ApiError) -> Self {
        let transport = Self::default();
        transport.replies.borrow_mut().push_back(Err(err));
        transport
    }

    pub fn push_reply(&self, status: u16, body: Value) {
        self.replies.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.borrow().last().cloned().expect("no request was sent")
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies.borrow_mut().pop_front().unwrap_or(Err(ApiError::Unreachable))
    }
}

/// In-memory toast sink for page flow tests.
pub fn toast_sink() -> RefCell<ToastState> {
    RefCell::new(ToastState::default())
}

/// Every toast pushed into `sink`, oldest first.
pub fn toast_messages(sink: &RefCell<ToastState>) -> Vec<(ToastKind, String)> {
    sink.borrow().items.iter().map(|t| (t.kind, t.message.clone())).collect()
}
