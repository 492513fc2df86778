use super::*;
use crate::net::error::ApiError;
use crate::net::testing::{ScriptedTransport, toast_messages, toast_sink};
use crate::state::persist::MemoryStore;
use crate::state::reset_flow::verified_email;
use crate::state::toasts::ToastKind;
use crate::util::validation::INCOMPLETE_OTP;
use futures::executor::block_on;
use serde_json::json;

fn digits(code: &str) -> Vec<String> {
    code.chars().map(String::from).collect()
}

// =============================================================
// Cooldown
// =============================================================

#[test]
fn cooldown_starts_locked_at_sixty_seconds() {
    let cooldown = ResendCooldown::start();
    assert_eq!(cooldown.remaining(), 60);
    assert!(!cooldown.can_resend());
    assert_eq!(cooldown.label(), "Resend in 60s");
}

#[test]
fn cooldown_unlocks_after_sixty_ticks_and_stays_at_zero() {
    let mut cooldown = ResendCooldown::start();
    for _ in 0..59 {
        cooldown.tick();
    }
    assert_eq!(cooldown.label(), "Resend in 1s");
    cooldown.tick();
    assert!(cooldown.can_resend());
    assert_eq!(cooldown.label(), "Resend");
    cooldown.tick();
    assert_eq!(cooldown.remaining(), 0);
}

#[test]
fn resend_blocked_while_a_resend_is_in_flight() {
    let mut cooldown = ResendCooldown::start();
    assert!(!resend_allowed(cooldown, false));
    for _ in 0..RESEND_COOLDOWN_SECS {
        cooldown.tick();
    }
    assert!(resend_allowed(cooldown, false));
    assert!(!resend_allowed(cooldown, true));
}

// =============================================================
// Verification
// =============================================================

#[test]
fn incomplete_code_is_rejected_locally() {
    let transport = ScriptedTransport::default();
    let sink = toast_sink();
    let session = MemoryStore::default();

    let partial = vec!["1".to_owned(), String::new(), "3".to_owned(), "4".to_owned()];
    assert!(!block_on(submit_otp(&transport, &sink, &session, "a@b.com", &partial)));
    assert!(transport.requests.borrow().is_empty());
    assert_eq!(toast_messages(&sink), vec![(ToastKind::Error, INCOMPLETE_OTP.to_owned())]);
}

#[test]
fn verified_code_remembers_email_for_reset_step() {
    let transport = ScriptedTransport::replying(200, json!({ "msg": "ok" }));
    let sink = toast_sink();
    let session = MemoryStore::default();

    assert!(block_on(submit_otp(&transport, &sink, &session, "admin@safeharbour.in", &digits("4821"))));
    assert_eq!(transport.last_request().body, Some(json!({ "email": "admin@safeharbour.in", "otp": "4821" })));
    assert_eq!(verified_email(&session).as_deref(), Some("admin@safeharbour.in"));
    assert_eq!(toast_messages(&sink), vec![(ToastKind::Success, "Verified successfully".to_owned())]);
}

#[test]
fn rejected_code_shows_backend_msg() {
    let transport = ScriptedTransport::replying(400, json!({ "msg": "OTP expired" }));
    let sink = toast_sink();
    let session = MemoryStore::default();

    assert!(!block_on(submit_otp(&transport, &sink, &session, "a@b.com", &digits("1111"))));
    assert_eq!(verified_email(&session), None);
    assert_eq!(toast_messages(&sink), vec![(ToastKind::Error, "OTP expired".to_owned())]);
}

#[test]
fn rejected_code_without_msg_says_invalid_otp() {
    let transport = ScriptedTransport::failing(ApiError::Unreachable);
    let sink = toast_sink();
    let session = MemoryStore::default();

    assert!(!block_on(submit_otp(&transport, &sink, &session, "a@b.com", &digits("1111"))));
    assert_eq!(toast_messages(&sink), vec![(ToastKind::Error, "Invalid OTP".to_owned())]);
}

// =============================================================
// Resend
// =============================================================

#[test]
fn resend_reports_both_outcomes() {
    let transport = ScriptedTransport::replying(200, json!({}));
    transport.push_reply(500, json!({}));
    let sink = toast_sink();

    assert!(block_on(resend_otp(&transport, &sink, "a@b.com")));
    assert!(!block_on(resend_otp(&transport, &sink, "a@b.com")));
    assert_eq!(
        toast_messages(&sink),
        vec![
            (ToastKind::Success, "OTP resent successfully".to_owned()),
            (ToastKind::Error, "Failed to resend OTP".to_owned()),
        ]
    );
}
