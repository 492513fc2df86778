use super::*;
use crate::net::client::Method;
use crate::net::testing::ScriptedTransport;
use futures::executor::block_on;

// =============================================================
// login
// =============================================================

#[test]
fn login_sends_capitalized_password_key() {
    let transport = ScriptedTransport::replying(200, json!({ "user": { "email": "a@b.com" } }));
    let outcome = block_on(login(&transport, "a@b.com", "Secret123"));
    assert_eq!(outcome, LoginOutcome::Ok);

    let req = transport.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/api/user/adminlogin");
    assert_eq!(req.body, Some(json!({ "email": "a@b.com", "Password": "Secret123" })));
}

#[test]
fn login_maps_backend_statuses() {
    let cases = [
        (400, LoginOutcome::InvalidCredentials("Invalid password".to_owned())),
        (402, LoginOutcome::NotAdmin("Invalid password".to_owned())),
        (404, LoginOutcome::NotFound("Invalid password".to_owned())),
        (500, LoginOutcome::Unknown(500)),
    ];
    for (status, expected) in cases {
        let transport = ScriptedTransport::replying(status, json!({ "msg": "Invalid password" }));
        assert_eq!(block_on(login(&transport, "a@b.com", "x")), expected, "status {status}");
    }
}

#[test]
fn login_without_msg_uses_generic_text() {
    let transport = ScriptedTransport::replying(404, json!({}));
    assert_eq!(
        block_on(login(&transport, "a@b.com", "x")),
        LoginOutcome::NotFound(GENERIC_FAILURE_MESSAGE.to_owned())
    );
}

#[test]
fn login_unreachable_backend() {
    let transport = ScriptedTransport::failing(ApiError::Unreachable);
    let outcome = block_on(login(&transport, "a@b.com", "x"));
    assert_eq!(outcome, LoginOutcome::Unreachable);
    assert!(!outcome.is_ok());
}

#[test]
fn login_unreadable_body_is_not_reported_as_unreachable() {
    let transport = ScriptedTransport::failing(ApiError::Decode("truncated body".to_owned()));
    let outcome = block_on(login(&transport, "a@b.com", "x"));
    assert_eq!(outcome, LoginOutcome::Malformed("invalid response body: truncated body".to_owned()));
    assert_ne!(outcome, LoginOutcome::Unreachable);
}

// =============================================================
// check_admin_email
// =============================================================

#[test]
fn check_admin_email_accepts_wrong_password_status() {
    let transport = ScriptedTransport::replying(400, json!({ "msg": "Invalid password" }));
    assert_eq!(block_on(check_admin_email(&transport, "admin@b.com")), Ok(()));
    let req = transport.last_request();
    assert_eq!(
        req.body,
        Some(json!({ "email": "admin@b.com", "Password": ADMIN_PROBE_PASSWORD }))
    );
}

#[test]
fn check_admin_email_rejects_non_admin_and_unknown() {
    for status in [402, 404] {
        let transport = ScriptedTransport::replying(status, json!({ "msg": "nope" }));
        assert_eq!(
            block_on(check_admin_email(&transport, "user@b.com")),
            Err(ApiError::Rejected(INVALID_EMAIL_MESSAGE.to_owned()))
        );
    }
}

#[test]
fn check_admin_email_propagates_other_failures() {
    let transport = ScriptedTransport::replying(500, json!({ "message": "db down" }));
    let err = block_on(check_admin_email(&transport, "a@b.com")).unwrap_err();
    assert_eq!(err.status(), 500);
    assert_eq!(err.user_message(), "db down");
}

// =============================================================
// OTP + reset
// =============================================================

#[test]
fn send_password_otp_puts_email_in_path() {
    let transport = ScriptedTransport::replying(200, json!({ "message": "sent" }));
    let data = block_on(send_password_otp(&transport, "admin@b.com")).unwrap();
    assert_eq!(data, json!({ "message": "sent" }));
    let req = transport.last_request();
    assert_eq!(req.path, "/api/user/password-reset-otp/admin@b.com");
    assert_eq!(req.body, None);
}

#[test]
fn verify_password_otp_posts_email_and_code() {
    let transport = ScriptedTransport::replying(200, json!({ "verified": true }));
    block_on(verify_password_otp(&transport, "a@b.com", "1234")).unwrap();
    let req = transport.last_request();
    assert_eq!(req.path, "/api/user/verify-password-otp");
    assert_eq!(req.body, Some(json!({ "email": "a@b.com", "otp": "1234" })));
}

#[test]
fn verify_password_otp_surfaces_rejection() {
    let transport = ScriptedTransport::replying(400, json!({ "msg": "Invalid OTP" }));
    let err = block_on(verify_password_otp(&transport, "a@b.com", "0000")).unwrap_err();
    assert_eq!(err.user_message(), "Invalid OTP");
}

#[test]
fn reset_password_uses_backend_key_casing() {
    let transport = ScriptedTransport::replying(200, json!({}));
    block_on(reset_password(&transport, "a@b.com", "NewPass1")).unwrap();
    let request = transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/api/user/reset-password");
    assert_eq!(request.body, Some(json!({ "Email": "a@b.com", "newPassword": "NewPass1" })));
}

#[test]
fn reset_password_keeps_error_status_for_the_caller() {
    let transport = ScriptedTransport::replying(400, json!({ "message": "Password reused" }));
    let resp = block_on(reset_password(&transport, "a@b.com", "NewPass1")).unwrap();
    assert_eq!(resp.status, 400);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_returns_backend_response() {
    let transport = ScriptedTransport::replying(200, json!({ "message": "Logged out" }));
    let resp = block_on(logout(&transport));
    assert_eq!(resp, ApiResponse::new(200, json!({ "message": "Logged out" })));
    assert_eq!(transport.last_request().body, Some(json!({})));
}

#[test]
fn logout_unreachable_is_status_zero() {
    let transport = ScriptedTransport::failing(ApiError::Unreachable);
    let resp = block_on(logout(&transport));
    assert_eq!(resp.status, 0);
    assert_eq!(resp.body, json!({ "message": UNREACHABLE_MESSAGE }));
}

// =============================================================
// lists + counsellor writes
// =============================================================

#[test]
fn fetch_all_users_reads_data_field() {
    let transport = ScriptedTransport::replying(200, json!({ "data": [{ "_id": "u1" }] }));
    let users = block_on(fetch_all_users(&transport)).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(transport.last_request().path, "/api/admin/get-all-users");
    assert_eq!(transport.last_request().method, Method::Get);
}

#[test]
fn fetch_all_counsellors_fails_on_status() {
    let transport = ScriptedTransport::replying(401, json!({ "message": "Unauthorized" }));
    let err = block_on(fetch_all_counsellors(&transport)).unwrap_err();
    assert_eq!(err.status(), 401);
}

#[test]
fn update_counsellor_sends_id_in_body() {
    let transport = ScriptedTransport::replying(200, json!({ "success": true }));
    let counsellor: Counsellor =
        serde_json::from_value(json!({ "_id": "c9", "fullname": "Meera", "hourly_rate": 900 })).unwrap();
    block_on(update_counsellor(&transport, "c9", &counsellor)).unwrap();

    let body = transport.last_request().body.unwrap();
    assert_eq!(body.get("id"), Some(&json!("c9")));
    assert!(body.get("_id").is_none());
    assert_eq!(body.get("hourly_rate"), Some(&json!(900.0)));
}

#[test]
fn create_and_delete_counsellor_paths() {
    let transport = ScriptedTransport::default();
    transport.push_reply(201, json!({ "_id": "c1" }));
    transport.push_reply(200, json!({}));

    let draft = Counsellor { fullname: Some("Meera".to_owned()), ..Counsellor::default() };
    block_on(create_counsellor(&transport, &draft)).unwrap();
    block_on(delete_counsellor(&transport, "c1")).unwrap();

    let requests = transport.requests.borrow();
    assert_eq!(requests[0].path, "/api/counsellor/create");
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].path, "/api/counsellor/delete/c1");
}
