//! Apply the dark-mode preference to the document.
//!
//! The preference itself lives in `state::theme`; this module only mirrors
//! it onto the `<html>` element as the `.dark-mode` class. Requires a
//! browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Label for the drawer switch.
pub fn toggle_label(enabled: bool) -> &'static str {
    if enabled { "Dark Mode: on" } else { "Dark Mode: off" }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            let result = if enabled { class_list.add_1(DARK_MODE_CLASS) } else { class_list.remove_1(DARK_MODE_CLASS) };
            if result.is_err() {
                log::warn!("could not update the {DARK_MODE_CLASS} class");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
