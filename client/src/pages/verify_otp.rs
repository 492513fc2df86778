//! Second step of the password reset flow: enter the emailed code.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from `/forgot` with the email in the route. A verified email is
//! handed to `/reset-password` through session storage. Resending is locked
//! behind a cooldown that counts down once per second.

#[cfg(test)]
#[path = "verify_otp_test.rs"]
mod verify_otp_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api;
use crate::net::client::{ApiClient, Transport, decode_segment};
use crate::state::Stores;
use crate::state::persist::KeyValueStore;
use crate::state::reset_flow::remember_verified_email;
use crate::state::toasts::{Notify, ToastState};
use crate::util::validation::{OTP_LENGTH, is_otp_digit_input, join_otp};

pub const RESEND_COOLDOWN_SECS: u32 = 60;
pub const VERIFIED_MESSAGE: &str = "Verified successfully";
pub const INVALID_OTP_MESSAGE: &str = "Invalid OTP";
pub const OTP_RESENT_MESSAGE: &str = "OTP resent successfully";
pub const RESEND_FAILED_MESSAGE: &str = "Failed to resend OTP";
const RESET_PASSWORD_PATH: &str = "/reset-password";

/// Seconds left before another code may be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResendCooldown {
    remaining: u32,
}

impl ResendCooldown {
    pub fn start() -> Self {
        Self { remaining: RESEND_COOLDOWN_SECS }
    }

    /// Advance by one second.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn remaining(self) -> u32 {
        self.remaining
    }

    pub fn can_resend(self) -> bool {
        self.remaining == 0
    }

    pub fn label(self) -> String {
        if self.can_resend() { "Resend".to_owned() } else { format!("Resend in {}s", self.remaining) }
    }
}

/// A new code may be requested once the cooldown is over and no resend is
/// in flight.
pub fn resend_allowed(cooldown: ResendCooldown, resending: bool) -> bool {
    cooldown.can_resend() && !resending
}

fn empty_digits() -> Vec<String> {
    vec![String::new(); OTP_LENGTH]
}

/// Verify the entered code. On success the email is remembered for the
/// reset step; on failure the toast carries the backend message.
pub async fn submit_otp<T: Transport>(
    transport: &T,
    notify: &impl Notify,
    session: &dyn KeyValueStore,
    email: &str,
    digits: &[String],
) -> bool {
    let otp = match join_otp(digits) {
        Ok(otp) => otp,
        Err(message) => {
            notify.error(message);
            return false;
        }
    };
    match api::verify_password_otp(transport, email, &otp).await {
        Ok(_) => {
            remember_verified_email(session, email);
            notify.success(VERIFIED_MESSAGE);
            true
        }
        Err(err) => {
            log::error!("otp verification failed: {err}");
            notify.error(err.response_message().unwrap_or(INVALID_OTP_MESSAGE));
            false
        }
    }
}

/// Request a fresh code. Returns whether the backend accepted.
pub async fn resend_otp<T: Transport>(transport: &T, notify: &impl Notify, email: &str) -> bool {
    match api::send_password_otp(transport, email).await {
        Ok(_) => {
            notify.success(OTP_RESENT_MESSAGE);
            true
        }
        Err(err) => {
            log::error!("otp resend failed: {err}");
            notify.error(RESEND_FAILED_MESSAGE);
            false
        }
    }
}

/// Count the cooldown down to zero, one tick per second, while the page is
/// mounted.
#[cfg(feature = "hydrate")]
fn run_cooldown(cooldown: RwSignal<ResendCooldown>, alive: std::sync::Arc<std::sync::atomic::AtomicBool>) {
    spawn_local(async move {
        while !cooldown.get_untracked().can_resend() {
            gloo_timers::future::TimeoutFuture::new(1000).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            cooldown.update(ResendCooldown::tick);
        }
    });
}

#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let stores = expect_context::<Stores>();
    let client = expect_context::<ApiClient>();
    let params = use_params_map();
    let navigate = use_navigate();

    let email = Memo::new(move |_| params.with(|p| p.get("email").map(|raw| decode_segment(&raw)).unwrap_or_default()));
    let digits = RwSignal::new(empty_digits());
    let loading = RwSignal::new(false);
    let cooldown = RwSignal::new(ResendCooldown::start());
    let resending = RwSignal::new(false);
    let inputs: [NodeRef<leptos::html::Input>; OTP_LENGTH] = std::array::from_fn(|_| NodeRef::new());

    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));
        run_cooldown(cooldown, alive.clone());
        alive
    };

    let focus = move |index: usize| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = inputs.get(index).and_then(|node| node.get()) {
                let _ = input.focus();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (index, inputs);
        }
    };

    let on_submit = {
        let client = client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if loading.get_untracked() {
                return;
            }
            loading.set(true);
            let client = client.clone();
            let stores = stores.clone();
            let navigate = navigate.clone();
            let entered = digits.get_untracked();
            let email_value = email.get_untracked();
            spawn_local(async move {
                let verified = submit_otp(&client, &toasts, stores.session.as_ref(), &email_value, &entered).await;
                loading.set(false);
                if verified {
                    navigate(RESET_PASSWORD_PATH, NavigateOptions::default());
                } else {
                    digits.set(empty_digits());
                    focus(0);
                }
            });
        }
    };

    let on_resend = move |_| {
        if !resend_allowed(cooldown.get_untracked(), resending.get_untracked()) {
            return;
        }
        resending.set(true);
        let client = client.clone();
        let email_value = email.get_untracked();
        #[cfg(feature = "hydrate")]
        let alive = alive.clone();
        spawn_local(async move {
            let sent = resend_otp(&client, &toasts, &email_value).await;
            resending.set(false);
            if sent {
                cooldown.set(ResendCooldown::start());
                #[cfg(feature = "hydrate")]
                run_cooldown(cooldown, alive);
            }
        });
    };

    let boxes = (0..OTP_LENGTH)
        .map(|index| {
            let on_input = move |ev: leptos::ev::Event| {
                let value = event_target_value(&ev);
                if !is_otp_digit_input(&value) {
                    // Re-render the stored digit over the rejected text.
                    digits.update(|_| ());
                    return;
                }
                let filled = !value.is_empty();
                digits.update(|d| d[index] = value);
                if filled && index + 1 < OTP_LENGTH {
                    focus(index + 1);
                }
            };
            let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Backspace" && index > 0 && digits.with_untracked(|d| d[index].is_empty()) {
                    focus(index - 1);
                }
            };
            let on_paste = move |ev: leptos::ev::ClipboardEvent| {
                ev.prevent_default();
                #[cfg(feature = "hydrate")]
                {
                    let pasted = ev.clipboard_data().and_then(|data| data.get_data("text").ok()).unwrap_or_default();
                    if let Some(parsed) = crate::util::validation::parse_pasted_otp(&pasted) {
                        digits.set(parsed.to_vec());
                        focus(OTP_LENGTH - 1);
                    }
                }
            };
            view! {
                <input
                    class="otp-box"
                    type="text"
                    inputmode="numeric"
                    maxlength="1"
                    node_ref=inputs[index]
                    prop:value=move || digits.with(|d| d[index].clone())
                    on:input=on_input
                    on:keydown=on_keydown
                    on:paste=on_paste
                />
            }
        })
        .collect_view();

    let complete = move || digits.with(|d| join_otp(d).is_ok());

    view! {
        <Title text="Verify Email"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Verify Email"</h1>
                <p class="auth-card__subtitle">
                    "Code sent to " <strong>{move || email.get()}</strong>
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <div class="otp-boxes">{boxes}</div>
                    <button
                        class="btn btn--primary auth-submit"
                        type="submit"
                        disabled=move || loading.get() || !complete()
                    >
                        {move || if loading.get() { "Verifying..." } else { "Verify Code" }}
                    </button>
                    <p class="auth-card__footnote">
                        "Didn't receive code? "
                        <button
                            class="auth-link auth-link--button"
                            type="button"
                            disabled=move || !resend_allowed(cooldown.get(), resending.get())
                            on:click=on_resend
                        >
                            {move || cooldown.get().label()}
                        </button>
                    </p>
                </form>
            </div>
        </div>
    }
}
