//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure a page can see is one of these variants. The toast text is
//! derived once in [`ApiError::user_message`] so pages never inspect raw
//! response bodies themselves.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Toast text used when neither the server nor the error carries a message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Message shown when the backend could not be reached at all.
pub const UNREACHABLE_MESSAGE: &str = "Server not responding";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response arrived (DNS, CORS, connection refused, offline).
    #[error("Server not responding")]
    Unreachable,
    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: Value },
    /// The body did not have the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// A client-side check refused the call before or after the request.
    #[error("{0}")]
    Rejected(String),
    /// Failure without any usable description.
    #[error("unexpected failure")]
    Unexpected,
}

impl ApiError {
    /// HTTP status of the failure; `0` when no response arrived.
    pub fn status(&self) -> u16 {
        match self {
            Self::Status { status, .. } => *status,
            _ => 0,
        }
    }

    /// Server-provided message from the response body, if any.
    ///
    /// The backend uses both `message` and `msg`; `message` wins.
    pub fn response_message(&self) -> Option<&str> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        body_message(body)
    }

    /// The error's own description, `None` when it has nothing useful to say.
    pub fn own_message(&self) -> Option<String> {
        match self {
            Self::Unexpected => None,
            Self::Rejected(msg) if msg.trim().is_empty() => None,
            other => Some(other.to_string()),
        }
    }

    /// Text for the failure toast: server message, then own message, then
    /// [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        self.response_message()
            .map(str::to_owned)
            .or_else(|| self.own_message())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned())
    }
}

/// Pull `message` (or `msg`) out of a JSON body when it is a non-empty string.
pub fn body_message(body: &Value) -> Option<&str> {
    ["message", "msg"]
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .find(|text| !text.trim().is_empty())
}
