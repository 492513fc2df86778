#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}

#[test]
fn toggle_label_reflects_state() {
    assert_eq!(toggle_label(true), "Dark Mode: on");
    assert_eq!(toggle_label(false), "Dark Mode: off");
}
