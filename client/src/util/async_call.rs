//! Uniform loading/notification protocol around backend calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages run every service call through [`run_async`] or [`run_request`] so
//! loading flags, success toasts, failure toasts, and logging behave the same
//! on every screen.
//!
//! ERROR HANDLING
//! ==============
//! The caller gets `Err(ApiError)` after the failure toast has been shown,
//! whether the operation failed or its `on_success` callback refused the
//! payload. The toast text is [`ApiError::user_message`]. `on_error` does not
//! suppress the toast.
//!
//! The loading flag is released by a drop guard, so `set_loading(false)` runs
//! on every exit path.

#[cfg(test)]
#[path = "async_call_test.rs"]
mod async_call_test;

use std::future::Future;

use serde_json::Value;

use crate::net::client::ApiResponse;
use crate::net::error::ApiError;
use crate::state::toasts::Notify;

type LoadingFn<'a> = Box<dyn Fn(bool) + 'a>;
type SuccessFn<'a, T> = Box<dyn FnOnce(&T) -> Result<(), ApiError> + 'a>;
type ErrorFn<'a> = Box<dyn FnOnce(&ApiError) + 'a>;

/// What [`run_request`] hands back on success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
    /// Only the response body.
    Data,
    /// `{status, data}`.
    Full,
}

/// Optional side effects for one call.
pub struct CallOptions<'a, T> {
    set_loading: Option<LoadingFn<'a>>,
    on_success: Option<SuccessFn<'a, T>>,
    on_error: Option<ErrorFn<'a>>,
    success_message: Option<String>,
}

impl<T> Default for CallOptions<'_, T> {
    fn default() -> Self {
        Self { set_loading: None, on_success: None, on_error: None, success_message: None }
    }
}

impl<'a, T> CallOptions<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with `true` before the operation and `false` once it settles.
    #[must_use]
    pub fn loading(mut self, set_loading: impl Fn(bool) + 'a) -> Self {
        self.set_loading = Some(Box::new(set_loading));
        self
    }

    /// Called with the payload when the operation succeeds. An `Err` turns
    /// the call into a failure: error toast, `on_error`, `Err` returned.
    #[must_use]
    pub fn on_success(mut self, callback: impl FnOnce(&T) -> Result<(), ApiError> + 'a) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Called with the error after the failure toast.
    #[must_use]
    pub fn on_error(mut self, callback: impl FnOnce(&ApiError) + 'a) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Show a success toast with this text when the call succeeds.
    #[must_use]
    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }
}

/// Holds the loading flag up for the lifetime of one call.
struct LoadingGuard<'a> {
    set_loading: Option<LoadingFn<'a>>,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(set_loading: Option<LoadingFn<'a>>) -> Self {
        if let Some(set) = &set_loading {
            set(true);
        }
        Self { set_loading }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Some(set) = self.set_loading.take() {
            set(false);
        }
    }
}

/// Run `op` with the loading/notification protocol and return its result.
///
/// # Errors
///
/// Returns the operation's [`ApiError`] after it has been logged and toasted.
pub async fn run_async<T, F, Fut>(notify: &impl Notify, options: CallOptions<'_, T>, op: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let CallOptions { set_loading, on_success, on_error, success_message } = options;
    let _loading = LoadingGuard::acquire(set_loading);

    let outcome = match op().await {
        Ok(value) => accept(notify, success_message.as_deref(), on_success, &value).map(|()| value),
        Err(err) => Err(err),
    };
    outcome.map_err(|err| report_failure(notify, on_error, err))
}

/// Like [`run_async`] for operations yielding a raw [`ApiResponse`].
///
/// Non-2xx statuses count as failures. `on_success` always receives the body;
/// `shape` picks whether the body or `{status, data}` is returned.
///
/// # Errors
///
/// Returns the transport or status [`ApiError`] after it has been logged and
/// toasted.
pub async fn run_request<F, Fut>(
    notify: &impl Notify,
    options: CallOptions<'_, Value>,
    shape: ResponseShape,
    op: F,
) -> Result<Value, ApiError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<ApiResponse, ApiError>>,
{
    let CallOptions { set_loading, on_success, on_error, success_message } = options;
    let _loading = LoadingGuard::acquire(set_loading);

    let outcome = match op().await.and_then(ApiResponse::error_for_status) {
        Ok(resp) => accept(notify, success_message.as_deref(), on_success, &resp.body).map(|()| match shape {
            ResponseShape::Data => resp.into_data(),
            ResponseShape::Full => resp.into_full(),
        }),
        Err(err) => Err(err),
    };
    outcome.map_err(|err| report_failure(notify, on_error, err))
}

fn accept<T>(
    notify: &impl Notify,
    message: Option<&str>,
    on_success: Option<SuccessFn<'_, T>>,
    payload: &T,
) -> Result<(), ApiError> {
    if let Some(message) = message {
        notify.success(message);
    }
    on_success.map_or(Ok(()), |callback| callback(payload))
}

fn report_failure(notify: &impl Notify, on_error: Option<ErrorFn<'_>>, err: ApiError) -> ApiError {
    log::error!("API Error: {err}");
    notify.error(&err.user_message());
    if let Some(callback) = on_error {
        callback(&err);
    }
    err
}
