//! Auth-session state for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and the sign-in page to coordinate redirects. The
//! flag is a UI hint only; the backend enforces authorization through its
//! session cookie.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::persist::{MemoryStore, PersistedFlag, SharedStore};

/// Local storage key of the session flag.
pub const AUTH_STORAGE_KEY: &str = "auth-storage";
const AUTH_FIELD: &str = "authenticated";

/// Whether this client believes it holds an authenticated admin session.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    flag: PersistedFlag,
}

impl AuthState {
    pub fn load(store: SharedStore) -> Self {
        Self { flag: PersistedFlag::load(store, AUTH_STORAGE_KEY, AUTH_FIELD) }
    }

    /// Unpersisted state, used for SSR and tests.
    pub fn in_memory() -> Self {
        Self::load(MemoryStore::shared())
    }

    pub fn is_authenticated(&self) -> bool {
        self.flag.get()
    }

    pub fn set_authenticated(&mut self, value: bool) {
        self.flag.set(value);
    }
}
