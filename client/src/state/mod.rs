//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `theme`, `toasts`, `table`) so pages
//! depend on small focused models. Anything that must survive a reload goes
//! through the `persist` key-value interface.

pub mod auth;
pub mod persist;
pub mod reset_flow;
pub mod table;
pub mod theme;
pub mod toasts;

use persist::{SharedStore, StorageArea};

/// Storage handles provided to pages through context.
#[derive(Clone)]
pub struct Stores {
    pub local: SharedStore,
    pub session: SharedStore,
}

impl Stores {
    /// Browser storage in the client, inert stores elsewhere.
    pub fn browser() -> Self {
        Self {
            local: persist::BrowserStore::shared(StorageArea::Local),
            session: persist::BrowserStore::shared(StorageArea::Session),
        }
    }

    /// Wipe both storage areas.
    pub fn clear_all(&self) {
        self.local.clear();
        self.session.clear();
    }
}
