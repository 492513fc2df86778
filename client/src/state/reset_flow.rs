//! Verified-email hand-off between the OTP and reset-password screens.
//!
//! The email is kept in session storage so it survives a reload of the reset
//! page but not the end of the tab.

#[cfg(test)]
#[path = "reset_flow_test.rs"]
mod reset_flow_test;

use super::persist::KeyValueStore;

/// Session storage key of the verified email.
pub const RESET_EMAIL_KEY: &str = "admin-reset-email";

pub fn remember_verified_email(store: &dyn KeyValueStore, email: &str) {
    store.set(RESET_EMAIL_KEY, email);
}

/// The email verified in the previous step, if any.
pub fn verified_email(store: &dyn KeyValueStore) -> Option<String> {
    store.get(RESET_EMAIL_KEY).filter(|email| !email.trim().is_empty())
}

pub fn forget_verified_email(store: &dyn KeyValueStore) {
    store.remove(RESET_EMAIL_KEY);
}
