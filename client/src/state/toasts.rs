//! Toast notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! The async wrapper and pages report outcomes through [`Notify`]. The app
//! provides an `RwSignal<ToastState>` implementation which the toast host
//! renders in the top-right corner; each toast closes itself after
//! [`TOAST_AUTO_CLOSE_MS`].

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_AUTO_CLOSE_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Warning => "toast--warning",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.to_owned() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Sink for user-visible notifications.
pub trait Notify {
    fn notify(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }

    fn warning(&self, message: &str) {
        self.notify(ToastKind::Warning, message);
    }
}

impl Notify for RwSignal<ToastState> {
    fn notify(&self, kind: ToastKind, message: &str) {
        let mut id = 0;
        self.update(|state| id = state.push(kind, message));

        #[cfg(feature = "hydrate")]
        {
            let toasts = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_AUTO_CLOSE_MS).await;
                toasts.update(|state| state.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

#[cfg(test)]
impl Notify for std::cell::RefCell<ToastState> {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.borrow_mut().push(kind, message);
    }
}
