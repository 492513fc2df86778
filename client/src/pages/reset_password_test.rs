use super::*;
use crate::net::testing::{ScriptedTransport, toast_messages, toast_sink};
use crate::state::persist::MemoryStore;
use crate::state::reset_flow::remember_verified_email;
use crate::state::toasts::ToastKind;
use futures::executor::block_on;
use serde_json::json;
use std::cell::RefCell;

fn verified_session() -> MemoryStore {
    let session = MemoryStore::default();
    remember_verified_email(&session, "admin@safeharbour.in");
    session
}

#[test]
fn missing_email_sends_admin_back_to_forgot() {
    let transport = ScriptedTransport::default();
    let sink = toast_sink();
    let session = MemoryStore::default();

    let next = block_on(submit_new_password(&transport, &sink, &session, "Abcdefg1", "Abcdefg1", |_| {}));

    assert_eq!(next, Some("/forgot"));
    assert!(transport.requests.borrow().is_empty());
    assert_eq!(toast_messages(&sink), vec![(ToastKind::Error, "Session expired. Please start over.".to_owned())]);
}

#[test]
fn weak_password_stays_on_form() {
    let transport = ScriptedTransport::default();
    let sink = toast_sink();
    let session = verified_session();

    let next = block_on(submit_new_password(&transport, &sink, &session, "abcdefg1", "abcdefg1", |_| {}));

    assert_eq!(next, None);
    assert!(transport.requests.borrow().is_empty());
    assert_eq!(
        toast_messages(&sink),
        vec![(ToastKind::Error, "Must contain at least one uppercase letter".to_owned())]
    );
}

#[test]
fn successful_reset_clears_email_and_goes_to_sign_in() {
    let transport = ScriptedTransport::replying(200, json!({ "msg": "Password updated" }));
    let sink = toast_sink();
    let session = verified_session();
    let loading = RefCell::new(Vec::new());

    let next = block_on(submit_new_password(&transport, &sink, &session, "Abcdefg1", "Abcdefg1", |v| {
        loading.borrow_mut().push(v);
    }));

    assert_eq!(next, Some("/sign-in"));
    assert_eq!(*loading.borrow(), vec![true, false]);
    assert_eq!(
        transport.last_request().body,
        Some(json!({ "Email": "admin@safeharbour.in", "newPassword": "Abcdefg1" }))
    );
    assert_eq!(verified_email(&session), None);
    assert_eq!(
        toast_messages(&sink),
        vec![(ToastKind::Success, "Password reset successful! Please login.".to_owned())]
    );
}

#[test]
fn backend_rejection_keeps_email_and_shows_msg() {
    let transport = ScriptedTransport::replying(400, json!({ "msg": "Password reused" }));
    let sink = toast_sink();
    let session = verified_session();

    let next = block_on(submit_new_password(&transport, &sink, &session, "Abcdefg1", "Abcdefg1", |_| {}));

    assert_eq!(next, None);
    assert!(verified_email(&session).is_some());
    assert_eq!(toast_messages(&sink), vec![(ToastKind::Error, "Password reused".to_owned())]);
}
