//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome (drawer, breadcrumb, toasts) and the
//! shared table pieces while reading/writing state from Leptos context
//! providers.

pub mod admin_drawer;
pub mod edit_dialog;
pub mod page_status;
pub mod pagination;
pub mod record_table;
pub mod route_guard;
pub mod toast_host;
