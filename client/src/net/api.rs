//! REST service functions for the admin backend.
//!
//! Each function wraps one HTTP call: fixed method and path, parameters
//! serialized into the path or JSON body, and a `Result` back. They are
//! generic over [`Transport`] so pages use the browser [`ApiClient`] while
//! tests script responses.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses become [`ApiError::Status`]. `login` and `logout` never
//! fail: login maps every response once into a closed [`LoginOutcome`], and
//! logout hands back a response (synthetic status `0` when unreachable) so
//! the caller can always finish the local cleanup.
//!
//! [`ApiClient`]: super::client::ApiClient

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::{Value, json};

use super::client::{ApiRequest, ApiResponse, Transport, encode_segment};
use super::error::{ApiError, GENERIC_FAILURE_MESSAGE, UNREACHABLE_MESSAGE, body_message};
use super::types::{Counsellor, User, parse_list};

const ADMIN_LOGIN_PATH: &str = "/api/user/adminlogin";
const VERIFY_OTP_PATH: &str = "/api/user/verify-password-otp";
const RESET_PASSWORD_PATH: &str = "/api/user/reset-password";
const LOGOUT_PATH: &str = "/api/user/logout";
const ALL_USERS_PATH: &str = "/api/admin/get-all-users";
const ALL_COUNSELLORS_PATH: &str = "/api/counsellor/getcounsellor";
const UPDATE_COUNSELLOR_PATH: &str = "/api/counsellor/update";
const CREATE_COUNSELLOR_PATH: &str = "/api/counsellor/create";

/// Password sent when probing whether an email belongs to an admin.
pub const ADMIN_PROBE_PASSWORD: &str = "verification_Dummy_pass";

/// Message for emails that do not belong to an admin account.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email.";

// =============================================================================
// AUTH
// =============================================================================

/// Result of an admin login attempt, mapped from the backend status code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// `200`: session cookie issued.
    Ok,
    /// `400`: wrong password.
    InvalidCredentials(String),
    /// `402`: the account exists but is not an admin.
    NotAdmin(String),
    /// `404`: no account for this email.
    NotFound(String),
    /// No response from the backend.
    Unreachable,
    /// Any other status.
    Unknown(u16),
    /// A response arrived but could not be read.
    Malformed(String),
}

impl LoginOutcome {
    pub fn from_response(resp: &ApiResponse) -> Self {
        let message = || body_message(&resp.body).unwrap_or(GENERIC_FAILURE_MESSAGE).to_owned();
        match resp.status {
            200 => Self::Ok,
            400 => Self::InvalidCredentials(message()),
            402 => Self::NotAdmin(message()),
            404 => Self::NotFound(message()),
            0 => Self::Unreachable,
            other => Self::Unknown(other),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

fn login_body(email: &str, password: &str) -> Value {
    // The backend reads the password from a capitalized key.
    json!({ "email": email, "Password": password })
}

/// `POST /api/user/adminlogin`.
pub async fn login<T: Transport>(transport: &T, email: &str, password: &str) -> LoginOutcome {
    let request = ApiRequest::post(ADMIN_LOGIN_PATH, Some(login_body(email, password)));
    match transport.send(request).await {
        Ok(resp) => LoginOutcome::from_response(&resp),
        Err(ApiError::Unreachable) => LoginOutcome::Unreachable,
        Err(ApiError::Status { status, body }) => LoginOutcome::from_response(&ApiResponse::new(status, body)),
        Err(err) => {
            log::error!("admin login failed: {err}");
            LoginOutcome::Malformed(err.to_string())
        }
    }
}

/// Check that `email` belongs to an admin by probing the login endpoint with
/// a dummy password.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with [`INVALID_EMAIL_MESSAGE`] for unknown or
/// non-admin emails, and the transport/status error for anything else.
pub async fn check_admin_email<T: Transport>(transport: &T, email: &str) -> Result<(), ApiError> {
    let request = ApiRequest::post(ADMIN_LOGIN_PATH, Some(login_body(email, ADMIN_PROBE_PASSWORD)));
    let resp = transport.send(request).await?;
    match resp.status {
        // 400 means the account exists and only the password was wrong.
        400 => Ok(()),
        402 | 404 => Err(ApiError::Rejected(INVALID_EMAIL_MESSAGE.to_owned())),
        _ => resp.error_for_status().map(|_| ()),
    }
}

fn password_otp_path(email: &str) -> String {
    format!("/api/user/password-reset-otp/{}", encode_segment(email))
}

/// `POST /api/user/password-reset-otp/{email}`: send a one-time code.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend is unreachable or rejects the request.
pub async fn send_password_otp<T: Transport>(transport: &T, email: &str) -> Result<Value, ApiError> {
    let resp = transport.send(ApiRequest::post(password_otp_path(email), None)).await?;
    Ok(resp.error_for_status()?.into_data())
}

/// `POST /api/user/verify-password-otp`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the code is rejected or the backend is unreachable.
pub async fn verify_password_otp<T: Transport>(transport: &T, email: &str, otp: &str) -> Result<Value, ApiError> {
    let body = json!({ "email": email, "otp": otp });
    let resp = transport.send(ApiRequest::post(VERIFY_OTP_PATH, Some(body))).await?;
    Ok(resp.error_for_status()?.into_data())
}

/// `POST /api/user/reset-password`. Hands back the raw response, error
/// statuses included, for [`run_request`](crate::util::async_call::run_request).
///
/// # Errors
///
/// Returns [`ApiError::Unreachable`] when no response arrived.
pub async fn reset_password<T: Transport>(transport: &T, email: &str, new_password: &str) -> Result<ApiResponse, ApiError> {
    let body = json!({ "Email": email, "newPassword": new_password });
    transport.send(ApiRequest::post(RESET_PASSWORD_PATH, Some(body))).await
}

/// `POST /api/user/logout`. Always yields a response; status `0` means the
/// backend could not be reached.
pub async fn logout<T: Transport>(transport: &T) -> ApiResponse {
    match transport.send(ApiRequest::post(LOGOUT_PATH, Some(json!({})))).await {
        Ok(resp) => resp,
        Err(ApiError::Status { status, body }) => ApiResponse::new(status, body),
        Err(err) => {
            log::warn!("logout request failed: {err}");
            ApiResponse::new(0, json!({ "message": UNREACHABLE_MESSAGE }))
        }
    }
}

// =============================================================================
// USERS
// =============================================================================

/// `GET /api/admin/get-all-users`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a
/// malformed list.
pub async fn fetch_all_users<T: Transport>(transport: &T) -> Result<Vec<User>, ApiError> {
    let resp = transport.send(ApiRequest::get(ALL_USERS_PATH)).await?;
    parse_list(resp.error_for_status()?.into_data())
}

// =============================================================================
// COUNSELLORS
// =============================================================================

/// `GET /api/counsellor/getcounsellor`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a
/// malformed list.
pub async fn fetch_all_counsellors<T: Transport>(transport: &T) -> Result<Vec<Counsellor>, ApiError> {
    let resp = transport.send(ApiRequest::get(ALL_COUNSELLORS_PATH)).await?;
    parse_list(resp.error_for_status()?.into_data())
}

fn counsellor_body(counsellor: &Counsellor) -> Result<Value, ApiError> {
    serde_json::to_value(counsellor).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST /api/counsellor/update` with the record fields plus `id`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the update is rejected or the backend is unreachable.
pub async fn update_counsellor<T: Transport>(transport: &T, id: &str, counsellor: &Counsellor) -> Result<Value, ApiError> {
    let mut body = counsellor_body(counsellor)?;
    if let Value::Object(map) = &mut body {
        map.remove("_id");
        map.insert("id".to_owned(), Value::String(id.to_owned()));
    }
    let resp = transport.send(ApiRequest::post(UPDATE_COUNSELLOR_PATH, Some(body))).await?;
    Ok(resp.error_for_status()?.into_data())
}

/// `POST /api/counsellor/create`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the record or is unreachable.
pub async fn create_counsellor<T: Transport>(transport: &T, counsellor: &Counsellor) -> Result<Value, ApiError> {
    let body = counsellor_body(counsellor)?;
    let resp = transport.send(ApiRequest::post(CREATE_COUNSELLOR_PATH, Some(body))).await?;
    Ok(resp.error_for_status()?.into_data())
}

fn delete_counsellor_path(id: &str) -> String {
    format!("/api/counsellor/delete/{}", encode_segment(id))
}

/// `DELETE /api/counsellor/delete/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the delete or is unreachable.
pub async fn delete_counsellor<T: Transport>(transport: &T, id: &str) -> Result<Value, ApiError> {
    let resp = transport.send(ApiRequest::delete(delete_counsellor_path(id))).await?;
    Ok(resp.error_for_status()?.into_data())
}
