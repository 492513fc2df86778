//! Shared HTTP client configuration and transport seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every service call in `net::api` goes through a [`Transport`]. In the
//! browser (`hydrate`) the [`ApiClient`] talks to the backend with
//! `gloo-net`, forwarding cookies so the backend session travels with each
//! request. During SSR there is no browser session, so the client reports
//! the backend as unreachable instead of issuing requests on the server.
//!
//! Non-2xx statuses are returned as ordinary [`ApiResponse`] values; the
//! service layer decides which statuses are errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::future::Future;

use serde_json::Value;

use super::error::ApiError;

/// Base URL used when `HARBOUR_API_URL` was not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// HTTP verbs used by the admin backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// A request relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Option<Value>) -> Self {
        Self { method: Method::Post, path: path.into(), body }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }
}

/// Status plus decoded body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn non-2xx responses into [`ApiError::Status`].
    ///
    /// # Errors
    ///
    /// Returns the status and body when the status is outside `200..300`.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status { status: self.status, body: self.body })
        }
    }

    /// The payload a caller normally wants: the response body.
    pub fn into_data(self) -> Value {
        self.body
    }

    /// The full response as JSON (`{status, data}`).
    pub fn into_full(self) -> Value {
        serde_json::json!({ "status": self.status, "data": self.body })
    }
}

/// Sends [`ApiRequest`]s to the backend.
///
/// Futures are not required to be `Send`: they run on the browser event loop.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Backend client configured with a base URL and credential forwarding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Client pointed at the base URL baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("HARBOUR_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl Transport for ApiClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let url = self.url(&request.path);
            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            }
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json");

            let sent = match request.body {
                Some(body) => builder.json(&body).map_err(|e| ApiError::Decode(e.to_string()))?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| {
                log::warn!("request to {url} failed: {e}");
                ApiError::Unreachable
            })?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(ApiResponse { status, body: parse_body(&text) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unreachable)
        }
    }
}

/// Decode a response body; non-JSON text is kept as a JSON string.
#[cfg(any(test, feature = "hydrate"))]
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

/// Percent-encode one path segment, keeping RFC 3986 unreserved chars and `@`.
pub fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~' | b'@') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Reverse [`encode_segment`]. Malformed escapes are kept as written.
pub fn decode_segment(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(byte) = raw.get(i + 1..i + 3).and_then(|hex| u8::from_str_radix(hex, 16).ok())
        {
            out.push(byte);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
