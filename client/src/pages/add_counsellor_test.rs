use super::*;
use crate::net::testing::{ScriptedTransport, toast_messages, toast_sink};
use crate::state::toasts::ToastKind;
use crate::util::validation::INVALID_EMAIL;
use futures::executor::block_on;
use serde_json::json;

fn draft(fullname: &str, email: &str) -> Counsellor {
    let mut record = Counsellor::default();
    record.set_field("fullname", fullname).unwrap();
    record.set_field("email", email).unwrap();
    record
}

#[test]
fn name_and_email_are_required() {
    assert_eq!(validate_new_counsellor(&draft("", "a@b.com")), Err("Full name is required"));
    assert_eq!(validate_new_counsellor(&draft("Dr. Mehta", "  ")), Err("Email is required"));
    assert_eq!(validate_new_counsellor(&draft("Dr. Mehta", "mehta")), Err(INVALID_EMAIL));
    assert_eq!(validate_new_counsellor(&draft("Dr. Mehta", "mehta@safeharbour.in")), Ok(()));
}

#[test]
fn numeric_fields_reject_text_at_input_time() {
    let mut record = Counsellor::default();
    assert!(record.set_field("hourly_rate", "abc").is_err());
    assert_eq!(record.set_field("hourly_rate", "900"), Ok(()));
    assert_eq!(record.hourly_rate, Some(900.0));
}

#[test]
fn invalid_draft_is_not_sent() {
    let transport = ScriptedTransport::default();
    let sink = toast_sink();

    assert!(!block_on(submit_counsellor(&transport, &sink, &draft("", ""), |_| {})));
    assert!(transport.requests.borrow().is_empty());
    assert_eq!(toast_messages(&sink), vec![(ToastKind::Error, "Full name is required".to_owned())]);
}

#[test]
fn valid_draft_is_created() {
    let transport = ScriptedTransport::replying(201, json!({ "message": "created" }));
    let sink = toast_sink();
    let mut record = draft("Dr. Mehta", " mehta@safeharbour.in ");
    record.set_field("years_experience", "7").unwrap();

    assert!(block_on(submit_counsellor(&transport, &sink, &record, |_| {})));

    let req = transport.last_request();
    assert_eq!(req.path, "/api/counsellor/create");
    assert_eq!(
        req.body,
        Some(json!({ "fullname": "Dr. Mehta", "email": "mehta@safeharbour.in", "gender": null, "years_experience": 7.0, "status": null }))
    );
    assert_eq!(toast_messages(&sink), vec![(ToastKind::Success, "Counsellor added successfully".to_owned())]);
}
