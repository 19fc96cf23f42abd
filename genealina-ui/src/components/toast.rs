//! Toast Notification Component
//!
//! Shows the banner left by the contact form.

use leptos::*;

use genealina::site::{Notice, NoticeKind};

use crate::state::global::use_global_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="notifications">
            {move || state.notice.get().map(|notice| view! {
                <ToastMessage notice=notice on_close=move |_| state.clear_notice() />
            })}
        </div>
    }
}

#[component]
fn ToastMessage(
    notice: Notice,
    on_close: impl Fn(ev::MouseEvent) + 'static,
) -> impl IntoView {
    let (icon, variant) = match notice.kind {
        NoticeKind::Success => ("✓", "notification--success"),
        NoticeKind::Error => ("✕", "notification--error"),
    };

    view! {
        <div class=format!("notification {}", variant) role="status">
            <span class="notification__icon">{icon}</span>
            <span class="notification__message">{notice.message}</span>
            <button class="notification__close" aria-label="Dismiss" on:click=on_close>
                "×"
            </button>
        </div>
    }
}
