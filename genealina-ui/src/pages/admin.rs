//! Admin Dashboard Page
//!
//! Lists contact submissions. Exactly one of the loading, empty, list and
//! error regions is visible at a time.

use leptos::*;

use genealina::dashboard::render::{format_date, preview};
use genealina::{ContactMessage, Region};

use crate::components::{Loading, MessageModal};
use crate::state::dashboard::{provide_dashboard, DashboardHandle};

/// Dashboard page component
#[component]
pub fn Admin() -> impl IntoView {
    let dashboard = provide_dashboard();
    let state = dashboard.state;

    let refresh = {
        let dashboard = dashboard.clone();
        move |_: ev::MouseEvent| dashboard.refresh()
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <div>
                    <h1 class="dashboard__title">"Messages"</h1>
                    <p class="dashboard__stats">
                        "Total: "
                        <span id="totalMessages">{move || state.with(|s| s.count())}</span>
                    </p>
                </div>

                <button
                    id="refreshBtn"
                    class="btn btn--primary"
                    disabled=move || state.with(|s| s.is_loading())
                    on:click=refresh
                >
                    "Refresh"
                </button>
            </header>

            <div id="messagesContainer" class="dashboard__content">
                {move || match state.with(|s| s.region()) {
                    Region::Loading => view! { <Loading /> }.into_view(),
                    Region::Empty => view! { <EmptyState /> }.into_view(),
                    Region::List => view! { <MessageList dashboard=dashboard.clone() /> }.into_view(),
                    Region::Error => view! { <ErrorState dashboard=dashboard.clone() /> }.into_view(),
                }}
            </div>

            <MessageModal />
        </div>
    }
}

#[component]
fn MessageList(dashboard: DashboardHandle) -> impl IntoView {
    let state = dashboard.state;

    view! {
        <div id="messagesList" class="messages-list">
            <For
                each=move || state.with(|s| s.messages().to_vec())
                key=|message| message.id.clone()
                children=move |message: ContactMessage| {
                    let dashboard = dashboard.clone();
                    let id = message.id.clone();
                    let data_id = id.clone();
                    view! {
                        <div
                            class="message-item"
                            data-id=data_id
                            on:click=move |_| dashboard.open(&id)
                        >
                            <div class="message-header">
                                <div class="message-info">
                                    <h3 class="message-name">{message.full_name()}</h3>
                                    <p class="message-email">{message.email.clone()}</p>
                                </div>
                                <div class="message-meta">
                                    <span class="message-date">
                                        {format_date(message.created_at.as_deref())}
                                    </span>
                                </div>
                            </div>
                            <div class="message-preview">{preview(&message.message)}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div id="emptyState" class="empty-state">
            <h3 class="empty-state__title">"No messages yet"</h3>
            <p class="empty-state__description">"Contact form submissions will show up here."</p>
        </div>
    }
}

#[component]
fn ErrorState(dashboard: DashboardHandle) -> impl IntoView {
    let message = dashboard
        .state
        .with_untracked(|s| s.error_message().unwrap_or_default().to_string());
    let retry = move |_: ev::MouseEvent| dashboard.refresh();

    view! {
        <div id="errorState" class="error-state">
            <h3 class="error-state__title">"Connection error"</h3>
            <p class="error-state__description">{message}</p>
            <button class="btn btn--primary" on:click=retry>"Retry"</button>
        </div>
    }
}
