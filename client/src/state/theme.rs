//! Persisted dark-mode preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::persist::{MemoryStore, PersistedFlag, SharedStore};

/// Local storage key of the theme flag.
pub const THEME_STORAGE_KEY: &str = "dark-storage";
const THEME_FIELD: &str = "darkMode";

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    flag: PersistedFlag,
}

impl ThemeState {
    pub fn load(store: SharedStore) -> Self {
        Self { flag: PersistedFlag::load(store, THEME_STORAGE_KEY, THEME_FIELD) }
    }

    pub fn in_memory() -> Self {
        Self::load(MemoryStore::shared())
    }

    pub fn dark_mode(&self) -> bool {
        self.flag.get()
    }

    /// Flip the preference and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.flag.toggle()
    }
}
