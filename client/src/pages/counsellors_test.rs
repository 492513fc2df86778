use super::*;
use crate::net::client::Method;
use crate::net::testing::{ScriptedTransport, toast_messages, toast_sink};
use crate::net::types::{EditableRecord, is_numeric_field};
use crate::state::toasts::ToastKind;
use futures::executor::block_on;
use serde_json::json;
use std::cell::RefCell;

fn counsellor() -> Counsellor {
    serde_json::from_value(json!({
        "_id": "c1",
        "fullname": "Dr. Mehta",
        "email": "mehta@safeharbour.in",
        "years_experience": "7",
        "hourly_rate": 1200,
        "status": "active",
    }))
    .unwrap()
}

// =============================================================
// Layout
// =============================================================

#[test]
fn numeric_columns_render_as_numbers() {
    let numeric: Vec<_> =
        COUNSELLOR_COLUMNS.iter().filter(|c| c.kind == crate::components::record_table::CellKind::Number).map(|c| c.id).collect();
    assert_eq!(numeric, ["years_experience", "hourly_rate"]);
    for id in numeric {
        assert!(is_numeric_field(id));
    }
}

#[test]
fn every_edit_field_is_editable_on_a_counsellor() {
    let mut record = counsellor();
    for field in COUNSELLOR_EDIT_FIELDS {
        assert_eq!(record.set_field(field, "3"), Ok(()), "{field}");
    }
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn fetch_reads_numeric_strings() {
    let transport = ScriptedTransport::replying(200, json!({ "data": [counsellor()] }));
    let sink = toast_sink();

    let rows = block_on(fetch_counsellors(&transport, &sink, |_| {}));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].years_experience, Some(7.0));
    assert_eq!(rows[0].field("hourly_rate").as_deref(), Some("1200"));
}

#[test]
fn fetch_without_data_is_empty_list() {
    let transport = ScriptedTransport::replying(200, json!({}));
    let sink = toast_sink();
    assert!(block_on(fetch_counsellors(&transport, &sink, |_| {})).is_empty());
    assert!(toast_messages(&sink).is_empty());
}

// =============================================================
// Save / delete
// =============================================================

#[test]
fn save_posts_fields_with_id_and_toasts() {
    let transport = ScriptedTransport::replying(200, json!({ "message": "ok" }));
    let sink = toast_sink();
    let saving = RefCell::new(Vec::new());

    let mut edited = counsellor();
    edited.set_field("hourly_rate", "1500").unwrap();
    assert!(block_on(save_counsellor(&transport, &sink, &edited, |v| saving.borrow_mut().push(v))));

    let req = transport.last_request();
    assert_eq!(req.path, "/api/counsellor/update");
    let body = req.body.unwrap();
    assert_eq!(body["id"], json!("c1"));
    assert_eq!(body["hourly_rate"], json!(1500.0));
    assert!(body.get("_id").is_none());
    assert_eq!(*saving.borrow(), vec![true, false]);
    assert_eq!(toast_messages(&sink), vec![(ToastKind::Success, "Counsellor updated successfully".to_owned())]);
}

#[test]
fn rejected_save_keeps_dialog_state() {
    let transport = ScriptedTransport::replying(422, json!({ "msg": "Email taken" }));
    let sink = toast_sink();
    let mut table = TableState::default();
    table.set_rows(vec![counsellor()]);
    table.begin_edit("c1");
    table.edit_field("email", "dup@safeharbour.in").unwrap();

    let edited = table.editing.clone().unwrap();
    if block_on(save_counsellor(&transport, &sink, &edited, |_| {})) {
        table.commit_edit();
    }

    assert!(table.editing.is_some());
    assert_eq!(table.rows[0].email.as_deref(), Some("mehta@safeharbour.in"));
    assert_eq!(toast_messages(&sink), vec![(ToastKind::Error, "Email taken".to_owned())]);
}

#[test]
fn delete_calls_endpoint_and_reports() {
    let transport = ScriptedTransport::replying(200, json!({}));
    let sink = toast_sink();

    assert!(block_on(remove_counsellor(&transport, &sink, "c1")));

    let req = transport.last_request();
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.path, "/api/counsellor/delete/c1");
    assert_eq!(toast_messages(&sink), vec![(ToastKind::Success, "Counsellor deleted successfully".to_owned())]);
}
