//! Message Detail Modal
//!
//! Detail view of the open message. The body is the only markup built from
//! record text; it is escaped before newlines become `<br>`.

use leptos::*;

use genealina::dashboard::render::{format_date, message_body_html, phone};

use crate::state::dashboard::use_dashboard;

#[component]
pub fn MessageModal() -> impl IntoView {
    let dashboard = use_dashboard();
    let state = dashboard.state;

    let close = {
        let dashboard = dashboard.clone();
        move |_: ev::MouseEvent| dashboard.close()
    };
    let on_overlay = {
        let close = close.clone();
        move |ev: ev::MouseEvent| {
            // Only clicks on the backdrop itself
            if ev.target() == ev.current_target() {
                close(ev);
            }
        }
    };
    let on_delete = move |_: ev::MouseEvent| dashboard.delete_current();

    view! {
        {move || state.with(|s| s.current().cloned()).map(|message| {
            let close = close.clone();
            let on_overlay = on_overlay.clone();
            let on_delete = on_delete.clone();
            view! {
                <div id="messageModal" class="modal-overlay show" on:click=on_overlay>
                    <div class="modal" role="dialog" aria-modal="true">
                        <div class="modal__header">
                            <h2 class="modal__title">"Message"</h2>
                            <button class="modal-close" aria-label="Close" on:click=close>"×"</button>
                        </div>

                        <div id="modalBody" class="message-detail">
                            <div class="detail-field">
                                <label>"Name:"</label>
                                <div>{message.full_name()}</div>
                            </div>
                            <div class="detail-field">
                                <label>"Email:"</label>
                                <div>{message.email.clone()}</div>
                            </div>
                            <div class="detail-field">
                                <label>"Phone:"</label>
                                <div>{phone(&message).to_string()}</div>
                            </div>
                            <div class="detail-field">
                                <label>"Date:"</label>
                                <div>{format_date(message.created_at.as_deref())}</div>
                            </div>
                            <div class="detail-field">
                                <label>"Message:"</label>
                                <div inner_html=message_body_html(&message) />
                            </div>
                        </div>

                        <div class="modal__footer">
                            <button id="modalDeleteBtn" class="btn btn--danger" on:click=on_delete>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
